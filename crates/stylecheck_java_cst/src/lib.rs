//! Source-aware view over the tree-sitter Java syntax tree.

mod node;
mod walker;

pub use node::CstNode;
pub use walker::TreeWalker;
