use crate::layouts::NodeId;

pub type WorkspaceId = usize;

/// One slot of the screen's worth of windows. Holds the root of its tree (if it has any windows)
/// and the node that had focus when the workspace was last left.
#[derive(Debug, Clone)]
pub struct Workspace {
    id: WorkspaceId,
    name: String,
    root: Option<NodeId>,
    focus: Option<NodeId>,
}

impl Workspace {
    pub fn new(id: WorkspaceId, name: String) -> Self {
        Self {
            id,
            name,
            root: None,
            focus: None,
        }
    }

    pub fn id(&self) -> WorkspaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub fn focus(&self) -> Option<NodeId> {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: Option<NodeId>) {
        self.focus = focus;
    }
}
