use crate::platform::WindowId;
pub use bin_tree::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

pub mod bin_tree;

/// Which axis a container divides between its two children.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Children are stacked top and bottom; the height is divided.
    Horizontal,
    /// Children sit side by side; the width is divided.
    Vertical,
}

/// One of the two child slots of a container. `First` is left/top, `Second` is right/bottom.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildSide {
    First,
    Second,
}

impl ChildSide {
    pub fn index(&self) -> usize {
        match self {
            ChildSide::First => 0,
            ChildSide::Second => 1,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            ChildSide::First => ChildSide::Second,
            ChildSide::Second => ChildSide::First,
        }
    }
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("{0}")]
    Error(String),

    #[error("Node arena is full, could not allocate a new node")]
    Allocation,

    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("Window not found: {0:#x}")]
    WindowNotFound(WindowId),

    #[error("Node {0:?} is not a window")]
    NotAWindow(NodeId),

    #[error("Node {0:?} is not a container")]
    NotAContainer(NodeId),

    #[error("Node {0:?} has no parent")]
    NoParent(NodeId),

    #[error("Node {0:?} is not linked as a child of its parent")]
    BrokenLink(NodeId),

    #[error("Node {0:?} is still attached to a tree")]
    StillAttached(NodeId),

    #[error("Cannot unfork the root node {0:?}")]
    UnforkRoot(NodeId),

    #[error("Split ratio must be strictly between 0 and 1, got {0}")]
    InvalidRatio(f64),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
