use crate::layouts::bin_tree::node::{
    is_valid_ratio, ContainerNode, Node, NodeId, WindowNode, DEFAULT_SPLIT_RATIO,
};
use crate::layouts::bin_tree::tree_iterator::BinTreeWindows;
use crate::layouts::{ChildSide, LayoutError, LayoutResult, SplitType};
use crate::platform::{Display, PlatformResult, Rect, WindowId};
use log::{trace, warn};
use slotmap::SlotMap;

// SlotMap holds at most 2^32 - 2 live values and panics past that.
const MAX_NODES: usize = u32::MAX as usize - 1;

/// Arena of binary split trees. Any number of trees (one per workspace) can live in the same
/// arena; a tree is identified by its root, the only node in it without a parent.
#[derive(Debug, Default)]
pub struct BinTree {
    nodes: SlotMap<NodeId, Node>,
}

impl BinTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn get(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    pub fn node(&self, node: NodeId) -> LayoutResult<&Node> {
        self.nodes.get(node).ok_or(LayoutError::NodeNotFound(node))
    }

    pub fn window(&self, node: NodeId) -> LayoutResult<&WindowNode> {
        self.node(node)?
            .as_window()
            .ok_or(LayoutError::NotAWindow(node))
    }

    pub fn container(&self, node: NodeId) -> LayoutResult<&ContainerNode> {
        self.node(node)?
            .as_container()
            .ok_or(LayoutError::NotAContainer(node))
    }

    fn container_mut(&mut self, node: NodeId) -> LayoutResult<&mut ContainerNode> {
        self.nodes
            .get_mut(node)
            .ok_or(LayoutError::NodeNotFound(node))?
            .as_container_mut()
            .ok_or(LayoutError::NotAContainer(node))
    }

    fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> LayoutResult<()> {
        self.nodes
            .get_mut(node)
            .ok_or(LayoutError::NodeNotFound(node))?
            .set_parent(parent);
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> LayoutResult<Option<NodeId>> {
        Ok(self.node(node)?.parent())
    }

    pub fn is_root(&self, node: NodeId) -> bool {
        matches!(self.nodes.get(node), Some(n) if n.parent().is_none())
    }

    pub fn window_id(&self, node: NodeId) -> Option<WindowId> {
        self.nodes.get(node)?.as_window().map(WindowNode::id)
    }

    pub fn root_of(&self, node: NodeId) -> LayoutResult<NodeId> {
        let mut current = node;
        while let Some(parent) = self.parent(current)? {
            current = parent;
        }
        Ok(current)
    }

    fn alloc(&mut self, node: Node) -> LayoutResult<NodeId> {
        if self.nodes.len() >= MAX_NODES {
            return Err(LayoutError::Allocation);
        }
        Ok(self.nodes.insert(node))
    }

    /// Creates a detached window leaf.
    pub fn create_window(&mut self, id: WindowId) -> LayoutResult<NodeId> {
        self.alloc(Node::Window(WindowNode { parent: None, id }))
    }

    fn parent_link(&self, node: NodeId) -> LayoutResult<(NodeId, ChildSide)> {
        let parent = self.parent(node)?.ok_or(LayoutError::NoParent(node))?;
        let side = self
            .container(parent)
            .map_err(|_| LayoutError::BrokenLink(node))?
            .side_of(node)
            .ok_or(LayoutError::BrokenLink(node))?;
        Ok((parent, side))
    }

    /// The slot `node` occupies in its parent.
    pub fn child_index(&self, node: NodeId) -> LayoutResult<ChildSide> {
        self.parent_link(node).map(|(_, side)| side)
    }

    /// The node in the other slot of `node`'s parent.
    pub fn sibling(&self, node: NodeId) -> LayoutResult<NodeId> {
        let (parent, side) = self.parent_link(node)?;
        Ok(self.container(parent)?.child(side.other()))
    }

    pub fn fork_node(
        &mut self,
        existing: NodeId,
        new: NodeId,
        split: SplitType,
    ) -> LayoutResult<NodeId> {
        self.fork_node_with_ratio(existing, new, split, DEFAULT_SPLIT_RATIO)
    }

    /// Wraps `existing` and the detached node `new` in a fresh container that takes over
    /// `existing`'s slot. `existing` becomes the first child, `new` the second. When `existing`
    /// was a root the container is the new root, and the caller has to update its own root
    /// reference. Returns the container.
    pub fn fork_node_with_ratio(
        &mut self,
        existing: NodeId,
        new: NodeId,
        split: SplitType,
        ratio: f64,
    ) -> LayoutResult<NodeId> {
        if !is_valid_ratio(ratio) {
            return Err(LayoutError::InvalidRatio(ratio));
        }
        if existing == new {
            return Err(LayoutError::Error(format!(
                "cannot fork node {existing:?} with itself"
            )));
        }
        if self.parent(new)?.is_some() {
            return Err(LayoutError::StillAttached(new));
        }
        if self.root_of(existing)? == new {
            return Err(LayoutError::Error(format!(
                "cannot fork {new:?} into its own subtree"
            )));
        }

        let parent = self.parent(existing)?;
        let link = match parent {
            Some(_) => Some(self.parent_link(existing)?),
            None => None,
        };

        let container = self.alloc(Node::Container(ContainerNode {
            parent,
            split,
            children: [existing, new],
            ratio,
        }))?;

        if let Some((parent, side)) = link {
            self.container_mut(parent)?.children[side.index()] = container;
        }
        self.set_parent(existing, Some(container))?;
        self.set_parent(new, Some(container))?;

        trace!("Forked {existing:?} with {new:?} into {container:?} ({split:?}, {ratio})");
        Ok(container)
    }

    /// Removes `old` from its tree. The parent container is dropped and `old`'s sibling takes
    /// the container's slot in the grandparent, or becomes the root if the container was the
    /// root. `old` is left in the arena as a detached root so the caller can release the
    /// windows under it with [`BinTree::remove_subtree`].
    ///
    /// Returns the removed container record. Its `children` still name `old` and the promoted
    /// sibling as they were before the unfork.
    pub fn unfork_node(&mut self, old: NodeId) -> LayoutResult<ContainerNode> {
        let (parent, side) = match self.parent_link(old) {
            Err(LayoutError::NoParent(node)) => return Err(LayoutError::UnforkRoot(node)),
            link => link?,
        };

        let container = self.container(parent)?;
        let sibling = container.child(side.other());
        let grandparent = container.parent;

        if let Some(grandparent) = grandparent {
            let parent_side = self
                .container(grandparent)?
                .side_of(parent)
                .ok_or(LayoutError::BrokenLink(parent))?;
            self.container_mut(grandparent)?.children[parent_side.index()] = sibling;
        }
        self.set_parent(sibling, grandparent)?;
        self.set_parent(old, None)?;

        trace!("Unforked {old:?}, {sibling:?} replaces {parent:?}");
        match self.nodes.remove(parent) {
            Some(Node::Container(container)) => Ok(container),
            _ => Err(LayoutError::NotAContainer(parent)),
        }
    }

    /// Frees a detached subtree and returns the display ids of the windows it held, left to
    /// right.
    pub fn remove_subtree(&mut self, node: NodeId) -> LayoutResult<Vec<WindowId>> {
        if let Some(parent) = self.parent(node)? {
            let linked = self
                .container(parent)
                .map(|container| container.side_of(node).is_some())
                .unwrap_or(false);
            if linked {
                return Err(LayoutError::StillAttached(node));
            }
        }

        let mut windows = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            match self.nodes.remove(current) {
                Some(Node::Window(window)) => windows.push(window.id),
                Some(Node::Container(container)) => {
                    stack.push(container.children[1]);
                    stack.push(container.children[0]);
                }
                None => {}
            }
        }

        Ok(windows)
    }

    pub fn set_split_ratio(&mut self, container: NodeId, ratio: f64) -> LayoutResult<()> {
        if !is_valid_ratio(ratio) {
            return Err(LayoutError::InvalidRatio(ratio));
        }
        self.container_mut(container)?.ratio = ratio;
        Ok(())
    }

    /// Window leaves under `root`, left to right.
    pub fn windows(&self, root: NodeId) -> BinTreeWindows<'_> {
        BinTreeWindows::new(self, root)
    }

    pub fn find_window(&self, root: NodeId, id: WindowId) -> Option<NodeId> {
        self.windows(root)
            .find(|node| self.window_id(*node) == Some(id))
    }

    /// The rectangle `node` receives when the tree it belongs to is laid out at `screen`.
    pub fn node_dimensions(&self, node: NodeId, screen: Rect) -> LayoutResult<Rect> {
        let mut path = Vec::new();
        let mut current = node;
        while self.parent(current)?.is_some() {
            let (parent, side) = self.parent_link(current)?;
            path.push((parent, side));
            current = parent;
        }

        let mut rect = screen;
        for (parent, side) in path.into_iter().rev() {
            let container = self.container(parent)?;
            let (first, second) = rect.split(container.split, container.ratio);
            rect = match side {
                ChildSide::First => first,
                ChildSide::Second => second,
            };
        }
        Ok(rect)
    }

    /// Divides `rect` over the subtree at `node` and sends every window its share.
    pub fn configure_tree<D: Display + ?Sized>(
        &self,
        display: &mut D,
        node: NodeId,
        rect: Rect,
    ) -> PlatformResult<()> {
        match self.nodes.get(node) {
            Some(Node::Window(window)) => display.configure_window(window.id, &rect),
            Some(Node::Container(container)) => {
                let (first, second) = rect.split(container.split, container.ratio);
                self.configure_tree(display, container.children[0], first)?;
                self.configure_tree(display, container.children[1], second)
            }
            None => {
                warn!("Tried to configure missing node {node:?}");
                Ok(())
            }
        }
    }

    /// Asks the display to destroy every window under `node`. The nodes themselves stay in the
    /// arena until [`BinTree::remove_subtree`] frees them.
    pub fn kill_tree<D: Display + ?Sized>(
        &self,
        display: &mut D,
        node: NodeId,
    ) -> PlatformResult<()> {
        for window in self.windows(node) {
            if let Some(id) = self.window_id(window) {
                display.destroy_window(id)?;
            }
        }
        Ok(())
    }

    /// Nearest window on `side` of `node` along `split`. Climbs until an ancestor with the same
    /// split holds the path on the opposite side, then descends the other subtree hugging the
    /// edge that faces `node`. `None` when no such ancestor exists.
    pub fn adjacent_window(
        &self,
        node: NodeId,
        split: SplitType,
        side: ChildSide,
    ) -> Option<NodeId> {
        let mut current = node;
        while let Some(parent) = self.nodes.get(current)?.parent() {
            let container = self.nodes.get(parent)?.as_container()?;
            if container.split == split && container.side_of(current) == Some(side.other()) {
                return self.edge_window(container.child(side), split, side.other());
            }
            current = parent;
        }
        None
    }

    fn edge_window(&self, node: NodeId, split: SplitType, edge: ChildSide) -> Option<NodeId> {
        let mut current = node;
        loop {
            match self.nodes.get(current)? {
                Node::Window(_) => return Some(current),
                Node::Container(container) if container.split == split => {
                    current = container.child(edge);
                }
                Node::Container(container) => current = container.child(ChildSide::First),
            }
        }
    }

    /// Verifies the parent/child links of every node in the arena.
    pub fn check_links(&self) -> LayoutResult<()> {
        for (id, node) in &self.nodes {
            if let Some(parent) = node.parent() {
                let container = self
                    .container(parent)
                    .map_err(|_| LayoutError::BrokenLink(id))?;
                if container.side_of(id).is_none() {
                    return Err(LayoutError::BrokenLink(id));
                }
            }

            if let Node::Container(container) = node {
                if !is_valid_ratio(container.ratio) {
                    return Err(LayoutError::InvalidRatio(container.ratio));
                }
                if container.children[0] == container.children[1] {
                    return Err(LayoutError::BrokenLink(container.children[0]));
                }
                for child in container.children {
                    match self.nodes.get(child) {
                        Some(child_node) if child_node.parent() == Some(id) => {}
                        _ => return Err(LayoutError::BrokenLink(child)),
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::bin_tree::tests::{
        assert_is_container, assert_is_window, new_balanced_tree, new_screen,
        new_tree_with_windows,
    };
    use crate::layouts::bin_tree::serialize_tree;
    use crate::platform::mock::MockDisplay;

    fn leaf_rects(tree: &BinTree, root: NodeId, screen: Rect) -> Vec<(WindowId, Rect)> {
        let mut display = MockDisplay::new();
        tree.configure_tree(&mut display, root, screen).unwrap();
        display.configured()
    }

    #[test]
    fn test_create_window() {
        let mut tree = BinTree::new();
        let node = tree.create_window(42).unwrap();
        assert_eq!(assert_is_window(&tree, node), 42);
        assert!(tree.is_root(node));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_fork_root_window() {
        let mut tree = BinTree::new();
        let w = tree.create_window(1).unwrap();
        let w2 = tree.create_window(2).unwrap();

        let container = tree.fork_node(w, w2, SplitType::Vertical).unwrap();

        let c = assert_is_container(&tree, container);
        assert_eq!(c.split(), SplitType::Vertical);
        assert_eq!(c.children(), [w, w2]);
        assert_eq!(c.ratio(), 0.5);
        assert_eq!(c.parent(), None);
        assert!(tree.is_root(container));
        assert_eq!(tree.parent(w).unwrap(), Some(container));
        assert_eq!(tree.parent(w2).unwrap(), Some(container));
        tree.check_links().unwrap();
    }

    #[test]
    fn test_fork_inner_node_keeps_slot() {
        let (mut tree, root, windows) = new_tree_with_windows(2);
        let new = tree.create_window(3).unwrap();

        let container = tree.fork_node(windows[0], new, SplitType::Horizontal).unwrap();

        let root_container = assert_is_container(&tree, root);
        assert_eq!(root_container.child(ChildSide::First), container);
        assert_eq!(tree.child_index(container).unwrap(), ChildSide::First);
        assert_eq!(tree.parent(container).unwrap(), Some(root));
        assert_eq!(
            assert_is_container(&tree, container).children(),
            [windows[0], new]
        );
        tree.check_links().unwrap();
    }

    #[test]
    fn test_fork_rejects_bad_input() {
        let (mut tree, root, windows) = new_tree_with_windows(2);
        let new = tree.create_window(3).unwrap();

        assert!(matches!(
            tree.fork_node_with_ratio(windows[0], new, SplitType::Vertical, 1.0),
            Err(LayoutError::InvalidRatio(_))
        ));
        assert!(matches!(
            tree.fork_node_with_ratio(windows[0], new, SplitType::Vertical, 0.0),
            Err(LayoutError::InvalidRatio(_))
        ));
        assert!(matches!(
            tree.fork_node(windows[0], windows[1], SplitType::Vertical),
            Err(LayoutError::StillAttached(_))
        ));
        assert!(tree.fork_node(new, new, SplitType::Vertical).is_err());
        assert!(tree.fork_node(windows[1], root, SplitType::Vertical).is_err());
        tree.check_links().unwrap();
    }

    #[test]
    fn test_child_index_and_sibling() {
        let (tree, root, windows) = new_tree_with_windows(2);
        assert_eq!(tree.child_index(windows[0]).unwrap(), ChildSide::First);
        assert_eq!(tree.child_index(windows[1]).unwrap(), ChildSide::Second);
        assert_eq!(tree.sibling(windows[0]).unwrap(), windows[1]);
        assert_eq!(tree.sibling(windows[1]).unwrap(), windows[0]);
        assert!(matches!(
            tree.child_index(root),
            Err(LayoutError::NoParent(_))
        ));
    }

    #[test]
    fn test_unfork_inverse_of_fork() {
        let (mut tree, root, windows) = new_tree_with_windows(3);
        let before = serialize_tree(&tree, root, new_screen()).unwrap();

        let new = tree.create_window(4).unwrap();
        tree.fork_node(windows[1], new, SplitType::Vertical).unwrap();
        tree.check_links().unwrap();

        let removed = tree.unfork_node(new).unwrap();
        assert_eq!(removed.children(), [windows[1], new]);
        assert!(tree.is_root(new));
        tree.check_links().unwrap();
        assert_eq!(tree.remove_subtree(new).unwrap(), vec![4]);

        let after = serialize_tree(&tree, root, new_screen()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_unfork_root_child_promotes_sibling() {
        let (mut tree, root, windows) = new_tree_with_windows(2);

        let removed = tree.unfork_node(windows[0]).unwrap();

        assert_eq!(removed.children(), [windows[0], windows[1]]);
        assert!(!tree.contains(root));
        assert!(tree.is_root(windows[1]));
        assert!(tree.is_root(windows[0]));
        tree.check_links().unwrap();
    }

    #[test]
    fn test_unfork_collapses_one_level() {
        let (mut tree, root, windows) = new_tree_with_windows(3);
        let inner = tree.parent(windows[1]).unwrap().unwrap();

        tree.unfork_node(windows[2]).unwrap();

        assert!(!tree.contains(inner));
        assert_eq!(tree.parent(windows[1]).unwrap(), Some(root));
        assert_eq!(
            assert_is_container(&tree, root).children(),
            [windows[0], windows[1]]
        );
        tree.check_links().unwrap();
    }

    #[test]
    fn test_unfork_root_fails() {
        let (mut tree, root, _) = new_tree_with_windows(2);
        assert!(matches!(
            tree.unfork_node(root),
            Err(LayoutError::UnforkRoot(_))
        ));
        tree.check_links().unwrap();
    }

    #[test]
    fn test_remove_subtree_requires_detached() {
        let (mut tree, root, windows) = new_tree_with_windows(3);
        assert!(matches!(
            tree.remove_subtree(windows[0]),
            Err(LayoutError::StillAttached(_))
        ));
        assert_eq!(tree.remove_subtree(root).unwrap(), vec![1, 2, 3]);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_configure_vertical_split() {
        let (tree, root, _) = new_tree_with_windows(2);
        let rects = leaf_rects(&tree, root, new_screen());
        assert_eq!(
            rects,
            vec![
                (1, Rect::new(0.0, 0.0, 500.0, 800.0)),
                (2, Rect::new(500.0, 0.0, 500.0, 800.0)),
            ]
        );
    }

    #[test]
    fn test_configure_nested_split() {
        let (tree, root, _) = new_tree_with_windows(3);
        let rects = leaf_rects(&tree, root, new_screen());
        assert_eq!(
            rects,
            vec![
                (1, Rect::new(0.0, 0.0, 500.0, 800.0)),
                (2, Rect::new(500.0, 0.0, 500.0, 400.0)),
                (3, Rect::new(500.0, 400.0, 500.0, 400.0)),
            ]
        );
    }

    #[test]
    fn test_configure_is_idempotent() {
        let (tree, root, _) = new_tree_with_windows(5);
        assert_eq!(
            leaf_rects(&tree, root, new_screen()),
            leaf_rects(&tree, root, new_screen())
        );
    }

    #[test]
    fn test_configure_partitions_rect() {
        let (tree, root) = new_balanced_tree(4, 0.3);
        let screen = new_screen();
        let rects = leaf_rects(&tree, root, screen);

        assert_eq!(rects.len(), 16);
        let total: f64 = rects.iter().map(|(_, rect)| rect.area()).sum();
        assert!((total - screen.area()).abs() < 1e-6);
        for (i, (_, a)) in rects.iter().enumerate() {
            assert!(a.area() > 0.0);
            assert!(a.x >= 0.0 && a.right() <= screen.right() + 1e-9);
            assert!(a.y >= 0.0 && a.bottom() <= screen.bottom() + 1e-9);
            for (_, b) in rects.iter().skip(i + 1) {
                let overlap_w = a.right().min(b.right()) - a.x.max(b.x);
                let overlap_h = a.bottom().min(b.bottom()) - a.y.max(b.y);
                assert!(overlap_w <= 1e-9 || overlap_h <= 1e-9);
            }
        }
    }

    #[test]
    fn test_configure_deep_tree() {
        for depth in 0..10 {
            let (tree, root) = new_balanced_tree(depth, 0.7);
            let rects = leaf_rects(&tree, root, new_screen());
            assert_eq!(rects.len(), 1 << depth);
            assert!(rects.iter().all(|(_, rect)| rect.area() > 0.0));
            tree.check_links().unwrap();
        }
    }

    #[test]
    fn test_configure_propagates_display_error() {
        let (tree, root, _) = new_tree_with_windows(3);
        let mut display = MockDisplay::new();
        display.bad_windows.insert(2);
        assert!(tree.configure_tree(&mut display, root, new_screen()).is_err());
    }

    #[test]
    fn test_kill_tree() {
        let (tree, root, windows) = new_tree_with_windows(4);
        let mut display = MockDisplay::new();
        tree.kill_tree(&mut display, root).unwrap();
        assert_eq!(display.destroyed(), vec![1, 2, 3, 4]);
        assert_eq!(tree.len(), windows.len() * 2 - 1);
    }

    #[test]
    fn test_node_dimensions() {
        let (tree, root, windows) = new_tree_with_windows(3);
        let screen = new_screen();
        assert_eq!(tree.node_dimensions(root, screen).unwrap(), screen);
        assert_eq!(
            tree.node_dimensions(windows[2], screen).unwrap(),
            Rect::new(500.0, 400.0, 500.0, 400.0)
        );
        let inner = tree.parent(windows[1]).unwrap().unwrap();
        assert_eq!(
            tree.node_dimensions(inner, screen).unwrap(),
            Rect::new(500.0, 0.0, 500.0, 800.0)
        );
    }

    #[test]
    fn test_find_window() {
        let (tree, root, windows) = new_tree_with_windows(5);
        assert_eq!(tree.find_window(root, 4), Some(windows[3]));
        assert_eq!(tree.find_window(root, 99), None);
    }

    #[test]
    fn test_adjacent_window_single() {
        let (tree, root, _) = new_tree_with_windows(1);
        for split in [SplitType::Horizontal, SplitType::Vertical] {
            for side in [ChildSide::First, ChildSide::Second] {
                assert_eq!(tree.adjacent_window(root, split, side), None);
            }
        }
    }

    #[test]
    fn test_adjacent_window() {
        // [1 | [2 / 3]]
        let (tree, _, windows) = new_tree_with_windows(3);
        let (w1, w2, w3) = (windows[0], windows[1], windows[2]);

        assert_eq!(
            tree.adjacent_window(w1, SplitType::Vertical, ChildSide::Second),
            Some(w2)
        );
        assert_eq!(
            tree.adjacent_window(w1, SplitType::Vertical, ChildSide::First),
            None
        );
        assert_eq!(
            tree.adjacent_window(w3, SplitType::Vertical, ChildSide::First),
            Some(w1)
        );
        assert_eq!(
            tree.adjacent_window(w2, SplitType::Horizontal, ChildSide::Second),
            Some(w3)
        );
        assert_eq!(
            tree.adjacent_window(w3, SplitType::Horizontal, ChildSide::First),
            Some(w2)
        );
        assert_eq!(
            tree.adjacent_window(w1, SplitType::Horizontal, ChildSide::Second),
            None
        );
    }

    #[test]
    fn test_adjacent_window_hugs_near_edge() {
        // [[1 | 2] | 3]
        let mut tree = BinTree::new();
        let w1 = tree.create_window(1).unwrap();
        let w3 = tree.create_window(3).unwrap();
        tree.fork_node(w1, w3, SplitType::Vertical).unwrap();
        let w2 = tree.create_window(2).unwrap();
        tree.fork_node(w1, w2, SplitType::Vertical).unwrap();

        assert_eq!(
            tree.adjacent_window(w3, SplitType::Vertical, ChildSide::First),
            Some(w2)
        );
        assert_eq!(
            tree.adjacent_window(w2, SplitType::Vertical, ChildSide::Second),
            Some(w3)
        );
    }

    #[test]
    fn test_set_split_ratio() {
        let (mut tree, root, windows) = new_tree_with_windows(2);
        tree.set_split_ratio(root, 0.25).unwrap();
        assert_eq!(
            tree.node_dimensions(windows[1], new_screen()).unwrap(),
            Rect::new(250.0, 0.0, 750.0, 800.0)
        );
        assert!(tree.set_split_ratio(root, 1.5).is_err());
        assert!(matches!(
            tree.set_split_ratio(windows[0], 0.5),
            Err(LayoutError::NotAContainer(_))
        ));
    }

    #[test]
    fn test_stale_handle() {
        let (mut tree, root, windows) = new_tree_with_windows(2);
        tree.remove_subtree(root).unwrap();
        assert!(matches!(
            tree.node(windows[0]),
            Err(LayoutError::NodeNotFound(_))
        ));
        assert_eq!(
            tree.adjacent_window(windows[0], SplitType::Vertical, ChildSide::Second),
            None
        );
    }
}
