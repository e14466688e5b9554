//! Finds the declaration a cursor position is meant to document.
//!
//! The walk starts at the innermost node under the cursor. Type references
//! are stepped over backwards (a return type precedes the name it belongs
//! to), namespace references forwards (a qualifier precedes the qualified
//! entity), and anything else climbs to its lexical parent until a
//! declaration is reached or the root is left behind.

use crate::syntax::{DeclarationClass, NodeId, SyntaxTree, WalkRole};
use crate::text::{Position, SourceText, next_position, previous_position};
use log::debug;
use std::collections::HashSet;

pub struct DeclarationResolver<'a> {
    tree: &'a SyntaxTree,
    text: &'a SourceText,
}

impl<'a> DeclarationResolver<'a> {
    pub fn new(tree: &'a SyntaxTree, text: &'a SourceText) -> Self {
        Self { tree, text }
    }

    /// Resolve the declaration to document at `pos`, with the template variant it needs.
    pub fn resolve(&self, pos: Position) -> Option<(NodeId, DeclarationClass)> {
        let start = Position::new(
            pos.line,
            pos.column.max(self.text.first_content_column(pos.line)),
        );
        let mut current = self.tree.node_at(start);
        let mut stepped_over = HashSet::new();
        debug!(target: "doxystub::resolver", "Resolving from {start}");

        loop {
            let node = self.tree.node(current);
            let role = match node.kind().walk_role() {
                // A reference reached a second time is climbed like any other node
                WalkRole::TypeReference | WalkRole::NamespaceReference
                    if !stepped_over.insert(current) =>
                {
                    WalkRole::Other
                }
                role => role,
            };
            debug!(
                target: "doxystub::resolver",
                "At {} '{}' ({})",
                node.kind().as_str(),
                node.spelling(),
                node.extent().start
            );

            let step = match role {
                WalkRole::Declaration(class) => return Some((current, class)),
                WalkRole::TypeReference => previous_position(self.text, node.extent().start),
                WalkRole::NamespaceReference => next_position(self.text, node.extent().end),
                WalkRole::Other => None,
            };

            let parent = node.parent()?;
            current = match step {
                Some(step) if self.tree.node(parent).extent().contains(step) => {
                    self.tree.node_at(step)
                }
                _ => parent,
            };
        }
    }
}
