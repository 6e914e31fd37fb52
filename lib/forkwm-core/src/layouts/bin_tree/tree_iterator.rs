use crate::layouts::bin_tree::node::{Node, NodeId};
use crate::layouts::bin_tree::BinTree;

/// Depth-first walk over the window leaves of one subtree, left (top) to right (bottom).
pub struct BinTreeWindows<'a> {
    tree: &'a BinTree,
    stack: Vec<NodeId>,
}

impl<'a> BinTreeWindows<'a> {
    pub fn new(tree: &'a BinTree, root: NodeId) -> Self {
        Self {
            tree,
            stack: vec![root],
        }
    }
}

impl Iterator for BinTreeWindows<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match self.tree.get(node) {
                Some(Node::Window(_)) => return Some(node),
                Some(Node::Container(container)) => {
                    let [first, second] = container.children();
                    self.stack.push(second);
                    self.stack.push(first);
                }
                None => {}
            }
        }

        None
    }
}
