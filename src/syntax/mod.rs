//! Lowered syntax trees.
//!
//! Parsers produce a [`SyntaxTree`]: an arena of nodes classified into the
//! [`NodeKind`]s that declaration lookup and comment generation care about.

mod kind;
pub mod lower;
mod tree;

pub use kind::{DeclarationClass, NodeKind, WalkRole};
pub use lower::lower_tree;
pub use tree::{Extent, NodeId, SyntaxNode, SyntaxTree, TypeSpelling};
