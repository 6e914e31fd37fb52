use crate::layouts::{ChildSide, SplitType};
use crate::platform::WindowId;

slotmap::new_key_type! {
    /// Stable handle of a node in a [`BinTree`](super::BinTree). Handles of removed nodes never
    /// resolve again.
    pub struct NodeId;
}

pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// A leaf. Holds the display-server window it lays out.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowNode {
    pub(super) parent: Option<NodeId>,
    pub(super) id: WindowId,
}

impl WindowNode {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An internal node. Always owns exactly two children.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub(super) parent: Option<NodeId>,
    pub(super) split: SplitType,
    pub(super) children: [NodeId; 2],
    pub(super) ratio: f64,
}

impl ContainerNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn split(&self) -> SplitType {
        self.split
    }

    /// Share of the split axis given to the first child.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn children(&self) -> [NodeId; 2] {
        self.children
    }

    pub fn child(&self, side: ChildSide) -> NodeId {
        self.children[side.index()]
    }

    /// Which slot holds `node`, by identity.
    pub fn side_of(&self, node: NodeId) -> Option<ChildSide> {
        if self.children[0] == node {
            Some(ChildSide::First)
        } else if self.children[1] == node {
            Some(ChildSide::Second)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Window(WindowNode),
    Container(ContainerNode),
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Window(window) => window.parent,
            Node::Container(container) => container.parent,
        }
    }

    pub(super) fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            Node::Window(window) => window.parent = parent,
            Node::Container(container) => container.parent = parent,
        }
    }

    pub fn is_window(&self) -> bool {
        matches!(self, Node::Window(_))
    }

    pub fn as_window(&self) -> Option<&WindowNode> {
        match self {
            Node::Window(window) => Some(window),
            Node::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            Node::Window(_) => None,
            Node::Container(container) => Some(container),
        }
    }

    pub(super) fn as_container_mut(&mut self) -> Option<&mut ContainerNode> {
        match self {
            Node::Window(_) => None,
            Node::Container(container) => Some(container),
        }
    }
}

pub fn is_valid_ratio(ratio: f64) -> bool {
    ratio > 0.0 && ratio < 1.0
}
