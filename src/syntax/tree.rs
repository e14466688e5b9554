use super::NodeKind;
use crate::text::Position;

/// Index of a node inside its [`SyntaxTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Half-open source span: `start` is the first character, `end` the one after the last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub start: Position,
    pub end: Position,
}

impl Extent {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "extent start {start} after end {end}");
        Self { start, end }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }
}

/// Spelling of a declared or result type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpelling(String);

impl TypeSpelling {
    pub fn new(spelling: impl Into<String>) -> Self {
        Self(spelling.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_void(&self) -> bool {
        self.0 == "void"
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    kind: NodeKind,
    spelling: String,
    extent: Extent,
    location: Position,
    result_type: Option<TypeSpelling>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SyntaxNode {
    /// A detached node; its location defaults to the extent start
    pub fn new(kind: NodeKind, spelling: impl Into<String>, extent: Extent) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            extent,
            location: extent.start,
            result_type: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Position of the declared name
    pub fn with_location(mut self, location: Position) -> Self {
        self.location = location;
        self
    }

    pub fn with_result_type(mut self, result_type: Option<TypeSpelling>) -> Self {
        self.result_type = result_type;
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn location(&self) -> Position {
        self.location
    }

    pub fn result_type(&self) -> Option<&TypeSpelling> {
        self.result_type.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of lowered syntax nodes for one parse session.
///
/// Children are stored in source order and never overlap, so position
/// queries descend one child per level.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    /// Create a tree holding only its translation-unit root
    pub fn new(extent: Extent) -> Self {
        Self {
            nodes: vec![SyntaxNode::new(NodeKind::TranslationUnit, "", extent)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `node` as the last child of `parent`
    pub fn push(&mut self, parent: NodeId, mut node: SyntaxNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Immediate children of `id` with the given kind, in source order
    pub fn children_of_kind(
        &self,
        id: NodeId,
        kind: NodeKind,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id)
            .children()
            .iter()
            .copied()
            .filter(move |child| self.node(*child).kind() == kind)
    }

    /// Innermost node whose extent contains `pos`.
    ///
    /// Positions outside every child resolve to the root.
    pub fn node_at(&self, pos: Position) -> NodeId {
        let mut current = self.root();
        while let Some(child) = self
            .node(current)
            .children()
            .iter()
            .copied()
            .find(|child| self.node(*child).extent().contains(pos))
        {
            current = child;
        }
        current
    }
}
