//! Lowering of a tree-sitter concrete syntax tree into a [`SyntaxTree`].
//!
//! Only nodes that matter for declaration lookup are emitted. Every other
//! grammar node is transparent: its descendants attach to the nearest
//! emitted ancestor, which keeps parameters and template parameters as
//! immediate children of the declaration they belong to.

use super::{Extent, NodeId, NodeKind, SyntaxNode, SyntaxTree, TypeSpelling};
use crate::text::{Position, SourceText, convert_byte_to_char_in_line};
use std::collections::HashSet;
use tree_sitter::{Node, Point, Tree};

/// Lower `tree`, parsed from `source`, whose lines are exposed by `text`.
pub fn lower_tree(tree: &Tree, source: &str, text: &SourceText) -> SyntaxTree {
    let root_node = tree.root_node();
    let last_line = text.line_count().max(1);
    let root_extent = Extent::new(
        Position::new(1, 1),
        Position::new(last_line, text.line_len(last_line) + 1),
    );

    let mut lowering = Lowering {
        source,
        text,
        class_names: collect_class_names(root_node, source),
        suppressed: HashSet::new(),
        tree: SyntaxTree::new(root_extent),
    };
    let root = lowering.tree.root();
    lowering.lower_children(root_node, root, &Scope::default());
    lowering.tree
}

/// Lexical context needed to classify member functions
#[derive(Debug, Clone, Default)]
struct Scope {
    class_name: Option<String>,
}

/// Facts about a function-like declaration
struct Signature<'t> {
    kind: NodeKind,
    name: String,
    name_node: Node<'t>,
    result_type: Option<TypeSpelling>,
}

struct Lowering<'a> {
    source: &'a str,
    text: &'a SourceText,
    class_names: HashSet<String>,
    /// Grammar nodes folded into an enclosing template declaration
    suppressed: HashSet<usize>,
    tree: SyntaxTree,
}

impl<'a> Lowering<'a> {
    fn lower_children(&mut self, node: Node, parent: NodeId, scope: &Scope) {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        for child in children {
            self.lower(child, parent, scope);
        }
    }

    fn lower(&mut self, node: Node, parent: NodeId, scope: &Scope) {
        let target = match self.classify(node, scope) {
            Some(lowered) => self.tree.push(parent, lowered),
            None => parent,
        };

        let child_scope = match node.kind() {
            "class_specifier" | "struct_specifier" if node.child_by_field_name("body").is_some() => {
                Scope {
                    class_name: self.class_name(node).map(|(name, _)| name),
                }
            }
            "compound_statement" => Scope::default(),
            _ => scope.clone(),
        };
        self.lower_children(node, target, &child_scope);
    }

    fn classify(&mut self, node: Node, scope: &Scope) -> Option<SyntaxNode> {
        if self.suppressed.contains(&node.id()) {
            return None;
        }
        let extent = self.extent(node);

        match node.kind() {
            "namespace_definition" => {
                let name = node.child_by_field_name("name");
                Some(self.named_node(NodeKind::Namespace, node, name))
            }
            "function_definition" | "declaration" | "field_declaration" => {
                if let Some(signature) = self.function_signature(node, scope) {
                    return Some(
                        SyntaxNode::new(signature.kind, signature.name, extent)
                            .with_location(self.position(signature.name_node.start_position()))
                            .with_result_type(signature.result_type),
                    );
                }
                let kind = match node.kind() {
                    "declaration" => NodeKind::Variable,
                    "field_declaration" => NodeKind::Field,
                    _ => return None,
                };
                let name = node
                    .child_by_field_name("declarator")
                    .and_then(declared_identifier);
                Some(self.named_node(kind, node, name))
            }
            "template_declaration" => self.template(node, scope),
            "class_specifier" | "struct_specifier" if declares_type(node) => {
                let kind = if node.kind() == "class_specifier" {
                    NodeKind::Class
                } else {
                    NodeKind::Struct
                };
                // Anonymous classes are transparent
                let (_, name) = self.class_name(node)?;
                Some(self.named_node(kind, node, Some(name)))
            }
            "enum_specifier" if node.child_by_field_name("body").is_some() => {
                let name = node.child_by_field_name("name");
                Some(self.named_node(NodeKind::Enum, node, name))
            }
            "type_parameter_declaration"
            | "optional_type_parameter_declaration"
            | "variadic_type_parameter_declaration" => {
                let name = node.child_by_field_name("name").or_else(|| {
                    let mut cursor = node.walk();
                    node.named_children(&mut cursor)
                        .find(|child| child.kind() == "type_identifier")
                });
                Some(self.named_node(NodeKind::TemplateTypeParameter, node, name))
            }
            "parameter_declaration"
            | "optional_parameter_declaration"
            | "variadic_parameter_declaration" => self.parameter(node),
            "compound_statement" => Some(SyntaxNode::new(NodeKind::CompoundStatement, "", extent)),
            "type_identifier" if !is_declared_type_name(node) => {
                Some(SyntaxNode::new(NodeKind::TypeReference, self.text_of(node), extent))
            }
            "namespace_identifier" if !is_declared_namespace_name(node) => {
                let spelling = self.text_of(node);
                let kind = if self.class_names.contains(&spelling) {
                    NodeKind::TypeReference
                } else {
                    NodeKind::NamespaceReference
                };
                Some(SyntaxNode::new(kind, spelling, extent))
            }
            "class_interface" | "category_interface" | "class_implementation" => {
                let kind = match node.kind() {
                    "class_interface" => NodeKind::ObjCInterface,
                    "category_interface" => NodeKind::ObjCCategory,
                    _ => NodeKind::ObjCImplementation,
                };
                let name = node.child_by_field_name("name").or_else(|| first_identifier(node));
                Some(self.named_node(kind, node, name))
            }
            "method_declaration" | "method_definition" => Some(self.objc_method(node)),
            "method_parameter" => {
                let mut cursor = node.walk();
                let name = node
                    .named_children(&mut cursor)
                    .filter(|child| child.kind() == "identifier")
                    .last();
                Some(self.named_node(NodeKind::Parameter, node, name))
            }
            _ => None,
        }
    }

    fn template(&mut self, node: Node, scope: &Scope) -> Option<SyntaxNode> {
        let parameters = node.child_by_field_name("parameters")?;
        // `template<>` specializations document as the plain declaration
        if parameters.named_child_count() == 0 {
            return None;
        }

        let inner = {
            let mut cursor = node.walk();
            node.named_children(&mut cursor).find(|child| {
                matches!(
                    child.kind(),
                    "function_definition"
                        | "declaration"
                        | "field_declaration"
                        | "class_specifier"
                        | "struct_specifier"
                )
            })?
        };
        let extent = self.extent(node);

        match inner.kind() {
            "class_specifier" | "struct_specifier" => {
                let (_, name) = self.class_name(inner)?;
                self.suppressed.insert(inner.id());
                Some(self.named_node(NodeKind::ClassTemplate, node, Some(name)))
            }
            _ => {
                let signature = self.function_signature(inner, scope)?;
                self.suppressed.insert(inner.id());
                Some(
                    SyntaxNode::new(NodeKind::FunctionTemplate, signature.name, extent)
                        .with_location(self.position(signature.name_node.start_position()))
                        .with_result_type(signature.result_type),
                )
            }
        }
    }

    fn function_signature<'t>(&self, decl: Node<'t>, scope: &Scope) -> Option<Signature<'t>> {
        let outer = decl.child_by_field_name("declarator")?;

        let (target, layers, trailing) = match unwrap_function_declarator(outer) {
            Some((function_declarator, layers)) => {
                let trailing = {
                    let mut cursor = function_declarator.walk();
                    function_declarator
                        .named_children(&mut cursor)
                        .find(|child| child.kind() == "trailing_return_type")
                };
                (function_declarator.child_by_field_name("declarator")?, layers, trailing)
            }
            // Conversion operators carry no function_declarator
            None if is_cast_operator(outer) => (outer, Vec::new(), None),
            None => return None,
        };

        let (name_node, owner) = entity_name(target, self.source)?;
        let name = if name_node.kind() == "operator_cast" {
            let cast_type = name_node
                .child_by_field_name("type")
                .map(|ty| self.text_of(ty))
                .unwrap_or_default();
            format!("operator {cast_type}")
        } else if name_node.kind() == "template_function" {
            name_node
                .child_by_field_name("name")
                .map(|n| self.text_of(n))
                .unwrap_or_else(|| self.text_of(name_node))
        } else {
            self.text_of(name_node)
        };

        let is_friend = decl
            .parent()
            .is_some_and(|parent| parent.kind() == "friend_declaration");
        let class_name = if is_friend {
            None
        } else {
            scope.class_name.as_deref()
        };

        let kind = if name_node.kind() == "destructor_name" {
            NodeKind::Destructor
        } else {
            match (class_name, owner.as_deref()) {
                (_, Some(owner)) if owner == name => NodeKind::Constructor,
                (Some(_), Some(_)) => NodeKind::Method,
                (None, Some(owner)) if self.class_names.contains(owner) => NodeKind::Method,
                (None, Some(_)) => NodeKind::Function,
                (Some(class), None) if class == name => NodeKind::Constructor,
                (Some(_), None) => NodeKind::Method,
                (None, None) => NodeKind::Function,
            }
        };

        let result_type = match kind {
            NodeKind::Constructor | NodeKind::Destructor => None,
            _ if name_node.kind() == "operator_cast" => name_node
                .child_by_field_name("type")
                .map(|ty| TypeSpelling::new(self.text_of(ty))),
            _ => self.result_type(decl, &layers, trailing),
        };

        Some(Signature {
            kind,
            name,
            name_node,
            result_type,
        })
    }

    fn result_type(
        &self,
        decl: Node,
        layers: &[String],
        trailing: Option<Node>,
    ) -> Option<TypeSpelling> {
        if let Some(trailing) = trailing {
            let mut cursor = trailing.walk();
            let descriptor = trailing.named_children(&mut cursor).next()?;
            return Some(TypeSpelling::new(self.text_of(descriptor)));
        }

        let type_node = decl.child_by_field_name("type")?;
        let mut parts: Vec<String> = {
            let mut cursor = decl.walk();
            decl.named_children(&mut cursor)
                .filter(|child| {
                    child.kind() == "type_qualifier" && child.start_byte() < type_node.start_byte()
                })
                .map(|child| self.text_of(child))
                .collect()
        };
        parts.push(self.text_of(type_node));
        if !layers.is_empty() {
            parts.push(layers.concat());
        }
        Some(TypeSpelling::new(parts.join(" ")))
    }

    fn parameter(&self, node: Node) -> Option<SyntaxNode> {
        let in_template_list = node
            .parent()
            .is_some_and(|parent| parent.kind() == "template_parameter_list");
        let declarator = node.child_by_field_name("declarator");

        // `f(void)` declares no parameters
        if !in_template_list
            && declarator.is_none()
            && node
                .child_by_field_name("type")
                .is_some_and(|ty| self.text_of(ty) == "void")
        {
            return None;
        }

        let kind = if in_template_list {
            NodeKind::NonTypeTemplateParameter
        } else {
            NodeKind::Parameter
        };
        let name = declarator.and_then(declared_identifier);
        Some(self.named_node(kind, node, name))
    }

    fn objc_method(&self, node: Node) -> SyntaxNode {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();

        let kind = match children.first().map(|child| child.kind()) {
            Some("+") => NodeKind::ObjCClassMethod,
            _ => NodeKind::ObjCInstanceMethod,
        };
        let keywords: Vec<Node> = children
            .iter()
            .copied()
            .filter(|child| child.kind() == "identifier")
            .collect();
        let has_parameters = children
            .iter()
            .any(|child| child.kind() == "method_parameter");

        let spelling = if has_parameters {
            keywords
                .iter()
                .map(|keyword| format!("{}:", self.text_of(*keyword)))
                .collect()
        } else {
            keywords
                .first()
                .map(|keyword| self.text_of(*keyword))
                .unwrap_or_default()
        };
        let result_type = children
            .iter()
            .find(|child| child.kind() == "method_type")
            .map(|ty| {
                let text = self.text_of(*ty);
                TypeSpelling::new(text.trim_matches(|c: char| c == '(' || c == ')').trim())
            });
        let location = keywords
            .first()
            .map_or(node.start_position(), |keyword| keyword.start_position());

        SyntaxNode::new(kind, spelling, self.extent(node))
            .with_location(self.position(location))
            .with_result_type(result_type)
    }

    /// Node of `kind` spanning `node`, spelled and located by `name` when present
    fn named_node(&self, kind: NodeKind, node: Node, name: Option<Node>) -> SyntaxNode {
        let extent = self.extent(node);
        match name {
            Some(name) => SyntaxNode::new(kind, self.text_of(name), extent)
                .with_location(self.position(name.start_position())),
            None => SyntaxNode::new(kind, "", extent),
        }
    }

    fn class_name<'t>(&self, node: Node<'t>) -> Option<(String, Node<'t>)> {
        let name = node.child_by_field_name("name")?;
        let name = match name.kind() {
            "template_type" => name.child_by_field_name("name").unwrap_or(name),
            "qualified_identifier" => entity_name(name, self.source).map_or(name, |(n, _)| n),
            _ => name,
        };
        Some((self.text_of(name), name))
    }

    fn text_of(&self, node: Node) -> String {
        collapse_whitespace(node.utf8_text(self.source.as_bytes()).unwrap_or(""))
    }

    fn extent(&self, node: Node) -> Extent {
        Extent::new(
            self.position(node.start_position()),
            self.position(node.end_position()),
        )
    }

    fn position(&self, point: Point) -> Position {
        let line = point.row + 1;
        let column = self.text.line(line).map_or(point.column, |text| {
            convert_byte_to_char_in_line(text, point.column)
        });
        Position::new(line, column + 1)
    }
}

/// Follow pointer/reference wrappers down to a function declarator.
///
/// Returns the declarator and the wrapper tokens (`*`, `&`, `&&`) outermost first.
fn unwrap_function_declarator(node: Node) -> Option<(Node, Vec<String>)> {
    let mut current = node;
    let mut layers = Vec::new();
    loop {
        match current.kind() {
            "function_declarator" => return Some((current, layers)),
            "pointer_declarator" => {
                layers.push("*".to_string());
                current = current.child_by_field_name("declarator")?;
            }
            "reference_declarator" => {
                let mut cursor = current.walk();
                let token = current
                    .children(&mut cursor)
                    .find(|child| !child.is_named())
                    .map_or("&", |child| child.kind());
                layers.push(token.to_string());
                current = first_named_child(current)?;
            }
            "attributed_declarator" => current = first_named_child(current)?,
            _ => return None,
        }
    }
}

fn is_cast_operator(node: Node) -> bool {
    match node.kind() {
        "operator_cast" => true,
        "qualified_identifier" => node
            .child_by_field_name("name")
            .is_some_and(is_cast_operator),
        _ => false,
    }
}

/// Name node of a declared entity and the name of its qualifying owner, if any.
///
/// Function pointers (`(*fp)(int)`) name no entity.
fn entity_name<'t>(node: Node<'t>, source: &str) -> Option<(Node<'t>, Option<String>)> {
    match node.kind() {
        "identifier" | "field_identifier" | "destructor_name" | "operator_name"
        | "operator_cast" | "template_function" => Some((node, None)),
        "qualified_identifier" => {
            let (name, inner_owner) = entity_name(node.child_by_field_name("name")?, source)?;
            let owner = inner_owner.or_else(|| {
                node.child_by_field_name("scope").map(|scope| {
                    let scope = match scope.kind() {
                        "template_type" => scope.child_by_field_name("name").unwrap_or(scope),
                        _ => scope,
                    };
                    collapse_whitespace(scope.utf8_text(source.as_bytes()).unwrap_or(""))
                })
            });
            Some((name, owner))
        }
        _ => None,
    }
}

/// Identifier introduced by a (possibly nested) declarator
fn declared_identifier(node: Node) -> Option<Node> {
    let mut current = node;
    loop {
        match current.kind() {
            "identifier" | "field_identifier" => return Some(current),
            "pointer_declarator"
            | "array_declarator"
            | "function_declarator"
            | "parenthesized_declarator"
            | "reference_declarator"
            | "variadic_declarator"
            | "init_declarator"
            | "attributed_declarator" => {
                current = current
                    .child_by_field_name("declarator")
                    .or_else(|| first_named_child(current))?;
            }
            _ => return None,
        }
    }
}

/// Whether a class/struct/union/enum specifier declares (rather than names) its type
fn declares_type(node: Node) -> bool {
    if node.child_by_field_name("body").is_some() {
        return true;
    }
    // Forward declarations: `class Foo;`
    node.parent().is_some_and(|parent| match parent.kind() {
        "translation_unit" | "declaration_list" | "field_declaration_list"
        | "template_declaration" => true,
        "declaration" | "field_declaration" => parent.child_by_field_name("declarator").is_none(),
        _ => false,
    })
}

fn is_declarator_wrapper(kind: &str) -> bool {
    matches!(
        kind,
        "pointer_declarator"
            | "array_declarator"
            | "function_declarator"
            | "parenthesized_declarator"
            | "reference_declarator"
            | "attributed_declarator"
    )
}

fn is_declared_type_name(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.kind() {
        "class_specifier" | "struct_specifier" | "union_specifier" | "enum_specifier" => {
            is_field(parent, "name", node) && declares_type(parent)
        }
        "type_parameter_declaration" | "variadic_type_parameter_declaration" => true,
        "optional_type_parameter_declaration" | "alias_declaration" => {
            is_field(parent, "name", node)
        }
        "type_definition" => is_field(parent, "declarator", node),
        // `typedef Node *NodePtr;`
        kind if is_declarator_wrapper(kind) => {
            let mut ancestor = parent;
            while is_declarator_wrapper(ancestor.kind()) {
                match ancestor.parent() {
                    Some(next) => ancestor = next,
                    None => return false,
                }
            }
            ancestor.kind() == "type_definition"
        }
        _ => false,
    }
}

fn is_declared_namespace_name(node: Node) -> bool {
    node.parent().is_some_and(|parent| match parent.kind() {
        "namespace_definition" | "nested_namespace_specifier" => true,
        "namespace_alias_definition" => is_field(parent, "name", node),
        _ => false,
    })
}

fn is_field(parent: Node, field: &str, node: Node) -> bool {
    parent
        .child_by_field_name(field)
        .is_some_and(|child| child.id() == node.id())
}

fn first_named_child(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).next()
}

fn first_identifier(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() == "identifier")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Names of every class, struct and union mentioned in the file
fn collect_class_names(root: Node, source: &str) -> HashSet<String> {
    let mut names = HashSet::new();
    let mut cursor = root.walk();
    let mut visited_children = false;
    loop {
        let node = cursor.node();
        if !visited_children
            && matches!(
                node.kind(),
                "class_specifier" | "struct_specifier" | "union_specifier"
            )
            && let Some(name) = node.child_by_field_name("name")
        {
            let name = match name.kind() {
                "template_type" => name.child_by_field_name("name").unwrap_or(name),
                _ => name,
            };
            if let Ok(text) = name.utf8_text(source.as_bytes()) {
                names.insert(text.to_string());
            }
        }

        if !visited_children && cursor.goto_first_child() {
            continue;
        }
        if cursor.goto_next_sibling() {
            visited_children = false;
        } else if cursor.goto_parent() {
            visited_children = true;
        } else {
            break;
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn lower(source: &str) -> SyntaxTree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        let text = SourceText::from_text(source, 4);
        lower_tree(&tree, source, &text)
    }

    /// Every node below the root in source order
    fn descendants(tree: &SyntaxTree) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = tree
            .node(tree.root())
            .children()
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(id) = stack.pop() {
            result.push(id);
            stack.extend(tree.node(id).children().iter().rev().copied());
        }
        result
    }

    fn find(tree: &SyntaxTree, kind: NodeKind, spelling: &str) -> Option<NodeId> {
        descendants(tree).into_iter().find(|id| {
            let node = tree.node(*id);
            node.kind() == kind && node.spelling() == spelling
        })
    }

    fn result_type(tree: &SyntaxTree, kind: NodeKind, spelling: &str) -> Option<String> {
        let id = find(tree, kind, spelling)?;
        tree.node(id)
            .result_type()
            .map(|result| result.as_str().to_string())
    }

    #[test]
    fn test_member_functions_are_classified() {
        let source = "\
class Widget {
public:
    Widget();
    ~Widget();
    int size() const;
    friend void swap(Widget &a, Widget &b);
};
int Widget::size() const { return 0; }
";
        let tree = lower(source);

        assert!(find(&tree, NodeKind::Class, "Widget").is_some());
        assert!(find(&tree, NodeKind::Constructor, "Widget").is_some());
        assert!(find(&tree, NodeKind::Destructor, "~Widget").is_some());
        assert!(find(&tree, NodeKind::Function, "swap").is_some());

        let methods: Vec<_> = descendants(&tree)
            .into_iter()
            .filter(|id| tree.node(*id).kind() == NodeKind::Method)
            .collect();
        assert_eq!(methods.len(), 2);
        let out_of_line = tree.node(methods[1]);
        assert_eq!(out_of_line.spelling(), "size");
        assert_eq!(out_of_line.extent().start, Position::new(8, 1));
        assert_eq!(out_of_line.location(), Position::new(8, 13));

        // The `Widget::` qualifier names a class, so it is a type reference
        let qualifier = tree.node(methods[1]).children()[0];
        assert_eq!(tree.node(qualifier).kind(), NodeKind::TypeReference);
        assert_eq!(tree.node(qualifier).spelling(), "Widget");
    }

    #[test]
    fn test_constructor_and_destructor_have_no_result_type() {
        let tree = lower("struct S {\n    S(int v);\n    ~S();\n};\n");
        let ctor = find(&tree, NodeKind::Constructor, "S").unwrap();
        assert!(tree.node(ctor).result_type().is_none());
        assert_eq!(tree.children_of_kind(ctor, NodeKind::Parameter).count(), 1);
        assert!(result_type(&tree, NodeKind::Destructor, "~S").is_none());
    }

    #[test]
    fn test_function_template_folds_inner_declaration() {
        let source = "\
template <typename T, int N>
T scaled(T value);
template <typename K>
struct Key {};
";
        let tree = lower(source);

        let template = find(&tree, NodeKind::FunctionTemplate, "scaled").unwrap();
        let node = tree.node(template);
        assert_eq!(node.extent().start, Position::new(1, 1));
        assert_eq!(node.location(), Position::new(2, 3));
        assert_eq!(node.result_type().map(|t| t.as_str()), Some("T"));

        let kinds: Vec<NodeKind> = node
            .children()
            .iter()
            .map(|id| tree.node(*id).kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::TemplateTypeParameter,
                NodeKind::NonTypeTemplateParameter,
                NodeKind::TypeReference,
                NodeKind::Parameter,
            ]
        );
        assert!(find(&tree, NodeKind::Function, "scaled").is_none());

        assert!(find(&tree, NodeKind::ClassTemplate, "Key").is_some());
        assert!(find(&tree, NodeKind::Struct, "Key").is_none());
    }

    #[test]
    fn test_explicit_specialization_is_not_a_template() {
        let tree = lower("template <> int size<char>() { return 1; }\n");
        assert!(find(&tree, NodeKind::Function, "size").is_some());
        assert!(find(&tree, NodeKind::FunctionTemplate, "size").is_none());
    }

    #[test]
    fn test_result_type_spellings() {
        let source = "\
const char *name();
std::string &label();
auto later() -> long;
void (*callback)(int);
";
        let tree = lower(source);

        assert_eq!(
            result_type(&tree, NodeKind::Function, "name").as_deref(),
            Some("const char *")
        );
        assert_eq!(
            result_type(&tree, NodeKind::Function, "label").as_deref(),
            Some("std::string &")
        );
        assert_eq!(
            result_type(&tree, NodeKind::Function, "later").as_deref(),
            Some("long")
        );
        // A function pointer is a variable, not a function
        assert!(find(&tree, NodeKind::Function, "callback").is_none());
        assert!(find(&tree, NodeKind::Variable, "callback").is_some());
    }

    #[test]
    fn test_declared_type_names_are_not_references() {
        let source = "struct Node;\ntypedef Node *NodePtr;\nNode *head();\n";
        let tree = lower(source);

        assert!(find(&tree, NodeKind::Struct, "Node").is_some());
        assert!(find(&tree, NodeKind::TypeReference, "NodePtr").is_none());

        let head = find(&tree, NodeKind::Function, "head").unwrap();
        assert_eq!(tree.node(head).result_type().map(|t| t.as_str()), Some("Node *"));
        let type_ref = tree.node(head).children()[0];
        assert_eq!(tree.node(type_ref).kind(), NodeKind::TypeReference);
        assert_eq!(
            tree.node(type_ref).extent(),
            Extent::new(Position::new(3, 1), Position::new(3, 5))
        );
    }

    #[test]
    fn test_namespace_qualifier_is_namespace_reference() {
        let tree = lower("namespace geo {\nstruct Point {};\n}\ngeo::Point origin();\n");

        assert!(find(&tree, NodeKind::Namespace, "geo").is_some());
        let origin = find(&tree, NodeKind::Function, "origin").unwrap();
        let kinds: Vec<NodeKind> = tree
            .node(origin)
            .children()
            .iter()
            .map(|id| tree.node(*id).kind())
            .collect();
        assert_eq!(
            kinds,
            vec![NodeKind::NamespaceReference, NodeKind::TypeReference]
        );
    }

    #[test]
    fn test_columns_count_characters() {
        let tree = lower("/* é */ int f();\n");
        let function = find(&tree, NodeKind::Function, "f").unwrap();
        assert_eq!(tree.node(function).extent().start, Position::new(1, 9));
        assert_eq!(tree.node(function).location(), Position::new(1, 13));
    }

    #[test]
    fn test_anonymous_class_is_transparent() {
        let tree = lower("class { int x; } anon;\n");
        assert!(
            descendants(&tree)
                .iter()
                .all(|id| tree.node(*id).kind() != NodeKind::Class)
        );
        assert!(find(&tree, NodeKind::Variable, "anon").is_some());
        assert!(find(&tree, NodeKind::Field, "x").is_some());
    }

    #[test]
    fn test_void_parameter_list_is_empty() {
        let tree = lower("int main(void);\n");
        let main = find(&tree, NodeKind::Function, "main").unwrap();
        assert_eq!(tree.children_of_kind(main, NodeKind::Parameter).count(), 0);
    }
}
