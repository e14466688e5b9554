/// Closed set of node kinds in a lowered syntax tree.
///
/// Kinds mirror the cursor kinds of C-family front ends rather than raw
/// grammar node names, so resolution and template dispatch never look at
/// grammar strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    TranslationUnit,
    Namespace,
    Function,
    Method,
    Constructor,
    Destructor,
    FunctionTemplate,
    Class,
    Struct,
    ClassTemplate,
    Enum,
    Variable,
    Field,
    Parameter,
    TemplateTypeParameter,
    NonTypeTemplateParameter,
    CompoundStatement,
    TypeReference,
    NamespaceReference,
    ObjCInterface,
    ObjCCategory,
    ObjCImplementation,
    ObjCInstanceMethod,
    ObjCClassMethod,
}

/// Which template variant documents a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationClass {
    FunctionLike,
    FunctionTemplate,
    ClassLike,
}

/// What the resolver does when its walk lands on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkRole {
    /// Use-site of a type: step backward past it
    TypeReference,
    /// Namespace qualifier: step forward past it
    NamespaceReference,
    /// Documentable declaration: stop here
    Declaration(DeclarationClass),
    /// Anything else: climb to the lexical parent
    Other,
}

impl NodeKind {
    pub fn declaration_class(self) -> Option<DeclarationClass> {
        match self {
            NodeKind::Function
            | NodeKind::Method
            | NodeKind::Constructor
            | NodeKind::Destructor
            | NodeKind::ObjCInstanceMethod => Some(DeclarationClass::FunctionLike),
            NodeKind::FunctionTemplate => Some(DeclarationClass::FunctionTemplate),
            NodeKind::Class
            | NodeKind::ClassTemplate
            | NodeKind::ObjCInterface
            | NodeKind::ObjCCategory
            | NodeKind::ObjCImplementation => Some(DeclarationClass::ClassLike),
            NodeKind::TranslationUnit
            | NodeKind::Namespace
            | NodeKind::Struct
            | NodeKind::Enum
            | NodeKind::Variable
            | NodeKind::Field
            | NodeKind::Parameter
            | NodeKind::TemplateTypeParameter
            | NodeKind::NonTypeTemplateParameter
            | NodeKind::CompoundStatement
            | NodeKind::TypeReference
            | NodeKind::NamespaceReference
            | NodeKind::ObjCClassMethod => None,
        }
    }

    pub fn walk_role(self) -> WalkRole {
        match self {
            NodeKind::TypeReference => WalkRole::TypeReference,
            NodeKind::NamespaceReference => WalkRole::NamespaceReference,
            other => other
                .declaration_class()
                .map_or(WalkRole::Other, WalkRole::Declaration),
        }
    }

    /// Human readable name used in log output
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::TranslationUnit => "translation unit",
            NodeKind::Namespace => "namespace",
            NodeKind::Function => "function",
            NodeKind::Method => "method",
            NodeKind::Constructor => "constructor",
            NodeKind::Destructor => "destructor",
            NodeKind::FunctionTemplate => "function template",
            NodeKind::Class => "class",
            NodeKind::Struct => "struct",
            NodeKind::ClassTemplate => "class template",
            NodeKind::Enum => "enum",
            NodeKind::Variable => "variable",
            NodeKind::Field => "field",
            NodeKind::Parameter => "parameter",
            NodeKind::TemplateTypeParameter => "template type parameter",
            NodeKind::NonTypeTemplateParameter => "non-type template parameter",
            NodeKind::CompoundStatement => "compound statement",
            NodeKind::TypeReference => "type reference",
            NodeKind::NamespaceReference => "namespace reference",
            NodeKind::ObjCInterface => "interface",
            NodeKind::ObjCCategory => "category",
            NodeKind::ObjCImplementation => "implementation",
            NodeKind::ObjCInstanceMethod => "instance method",
            NodeKind::ObjCClassMethod => "class method",
        }
    }
}
