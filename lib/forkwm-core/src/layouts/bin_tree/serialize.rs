use crate::layouts::bin_tree::node::{Node, NodeId};
use crate::layouts::bin_tree::BinTree;
use crate::layouts::{LayoutError, LayoutResult, SplitType};
use crate::platform::{Rect, WindowId};
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum SerializedNode {
    Container(SerializedContainer),
    Window(SerializedWindow),
}

#[derive(Serialize)]
struct SerializedContainer {
    split: SplitType,
    ratio: f64,
    rect: Rect,
    children: Vec<SerializedNode>,
}

#[derive(Serialize)]
struct SerializedWindow {
    id: WindowId,
    rect: Rect,
}

/// Snapshot of the subtree at `root` laid out at `rect`, for logs and the CLI preview.
pub fn serialize_tree(tree: &BinTree, root: NodeId, rect: Rect) -> LayoutResult<serde_yaml::Value> {
    let serialized = serialize_node(tree, root, rect)?;
    serde_yaml::to_value(serialized).map_err(|e| LayoutError::Error(e.to_string()))
}

fn serialize_node(tree: &BinTree, node: NodeId, rect: Rect) -> LayoutResult<SerializedNode> {
    Ok(match tree.node(node)? {
        Node::Window(window) => SerializedNode::Window(SerializedWindow {
            id: window.id(),
            rect,
        }),
        Node::Container(container) => {
            let (first, second) = rect.split(container.split(), container.ratio());
            let [first_child, second_child] = container.children();
            SerializedNode::Container(SerializedContainer {
                split: container.split(),
                ratio: container.ratio(),
                rect,
                children: vec![
                    serialize_node(tree, first_child, first)?,
                    serialize_node(tree, second_child, second)?,
                ],
            })
        }
    })
}
