use tree_sitter::{Node, TreeCursor};

use crate::CstNode;

/// Pre-order traversal of a subtree.
///
/// Nodes are yielded parent first, then children left to right, which is the
/// order their text appears in the source. The walk never leaves the subtree
/// rooted at the node it was created with.
pub struct TreeWalker<'a> {
    cursor: TreeCursor<'a>,
    source: &'a str,
    done: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: Node<'a>, source: &'a str) -> Self {
        Self {
            cursor: root.walk(),
            source,
            done: false,
        }
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = CstNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = CstNode::new(self.cursor.node(), self.source);

        if !self.cursor.goto_first_child() {
            while !self.cursor.goto_next_sibling() {
                if !self.cursor.goto_parent() {
                    self.done = true;
                    break;
                }
            }
        }

        Some(node)
    }
}
