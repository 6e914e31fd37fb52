pub use node::*;
pub use serialize::*;
pub use tree::*;
pub use tree_iterator::*;

mod node;
mod serialize;
mod tree;
mod tree_iterator;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::layouts::SplitType;
    use crate::platform::{Rect, WindowId};

    pub fn new_screen() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    /// A chain of `count` windows with ids 1..=count, each forked off the previous one with
    /// alternating splits. Returns the tree, its root, and the window nodes left to right.
    pub fn new_tree_with_windows(count: u32) -> (BinTree, NodeId, Vec<NodeId>) {
        let mut tree = BinTree::new();
        let mut windows = vec![tree.create_window(1).unwrap()];
        for id in 2..=count {
            let split = if id % 2 == 0 {
                SplitType::Vertical
            } else {
                SplitType::Horizontal
            };
            let new = tree.create_window(id).unwrap();
            tree.fork_node(*windows.last().unwrap(), new, split).unwrap();
            windows.push(new);
        }
        let root = tree.root_of(windows[0]).unwrap();
        (tree, root, windows)
    }

    /// A balanced tree of the given depth, `2^depth` windows.
    pub fn new_balanced_tree(depth: u32, ratio: f64) -> (BinTree, NodeId) {
        let mut tree = BinTree::new();
        let mut next_id: WindowId = 1;
        let mut leaves = vec![tree.create_window(next_id).unwrap()];
        for level in 0..depth {
            let split = if level % 2 == 0 {
                SplitType::Vertical
            } else {
                SplitType::Horizontal
            };
            let mut next_leaves = Vec::with_capacity(leaves.len() * 2);
            for leaf in leaves {
                next_id += 1;
                let new = tree.create_window(next_id).unwrap();
                tree.fork_node_with_ratio(leaf, new, split, ratio).unwrap();
                next_leaves.push(leaf);
                next_leaves.push(new);
            }
            leaves = next_leaves;
        }
        let root = tree.root_of(leaves[0]).unwrap();
        (tree, root)
    }

    pub fn assert_is_window(tree: &BinTree, node: NodeId) -> WindowId {
        match tree.get(node) {
            Some(Node::Window(window)) => window.id(),
            other => panic!("Expected {:?} to be a window, got {:?}", node, other),
        }
    }

    pub fn assert_is_container(tree: &BinTree, node: NodeId) -> ContainerNode {
        match tree.get(node) {
            Some(Node::Container(container)) => container.clone(),
            other => panic!("Expected {:?} to be a container, got {:?}", node, other),
        }
    }
}
