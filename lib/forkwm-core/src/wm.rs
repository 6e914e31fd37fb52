use crate::config::Config;
use crate::layouts::{serialize_tree, BinTree, ChildSide, LayoutError, NodeId, SplitType};
use crate::platform::{Display, PlatformError, Rect, WindowId};
use crate::tags::{Tag, TagSpace, TagSpaces};
use crate::workspace::{Workspace, WorkspaceId};
use log::{debug, info, trace, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WMError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Display error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    #[error("{0}")]
    Error(String),
}

pub type WMResult<T> = Result<T, WMError>;

/// All layout state for one screen: the node arena, the workspaces rooted in it, per-workspace
/// focus, and the tag spaces anchored at workspace roots. Everything runs on the thread that
/// owns this value; nothing here blocks.
#[derive(Debug)]
pub struct WindowManager {
    config: Config,
    screen: Rect,
    tree: BinTree,
    workspaces: Vec<Workspace>,
    current: WorkspaceId,
    tag_spaces: TagSpaces,
}

impl WindowManager {
    pub fn new(config: Config, screen: Rect) -> Self {
        let workspaces = (0..config.workspaces.max(1))
            .map(|id| Workspace::new(id, (id + 1).to_string()))
            .collect::<Vec<_>>();
        debug!(
            "Created {} workspaces on a {}x{} screen",
            workspaces.len(),
            screen.width,
            screen.height
        );

        Self {
            config,
            screen,
            tree: BinTree::new(),
            workspaces,
            current: 0,
            tag_spaces: TagSpaces::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn tree(&self) -> &BinTree {
        &self.tree
    }

    pub fn tag_spaces(&self) -> &TagSpaces {
        &self.tag_spaces
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn current_workspace(&self) -> &Workspace {
        &self.workspaces[self.current]
    }

    pub fn focus(&self) -> Option<NodeId> {
        self.current_workspace().focus()
    }

    pub fn focused_window(&self) -> Option<WindowId> {
        self.focus().and_then(|node| self.tree.window_id(node))
    }

    /// Finds the workspace and node holding display window `id`.
    pub fn locate_window(&self, id: WindowId) -> Option<(WorkspaceId, NodeId)> {
        self.workspaces.iter().find_map(|workspace| {
            let root = workspace.root()?;
            self.tree
                .find_window(root, id)
                .map(|node| (workspace.id(), node))
        })
    }

    pub fn find_window(&self, id: WindowId) -> Option<NodeId> {
        self.locate_window(id).map(|(_, node)| node)
    }

    /// Places a newly mapped window in the current workspace. An empty workspace is filled by
    /// it; otherwise the focused node is forked. Only the subtree that changed is laid out.
    pub fn map_window<D: Display + ?Sized>(
        &mut self,
        display: &mut D,
        id: WindowId,
    ) -> WMResult<NodeId> {
        if let Some(node) = self.find_window(id) {
            trace!("Window {id:#x} is already managed");
            return Ok(node);
        }

        let new = self.tree.create_window(id)?;
        let previous_focus = self.focus();
        let relayout_from = match self.insert(new) {
            Ok(node) => node,
            Err(e) => {
                self.tree.remove_subtree(new)?;
                return Err(e);
            }
        };

        if self.config.auto_tag {
            self.auto_tag(new);
        }
        self.workspaces[self.current].set_focus(Some(new));

        if let Err(e) = self.configure_subtree(display, relayout_from) {
            warn!("Failed to lay out window {id:#x}, dropping it: {e}");
            self.rollback_map(display, new, previous_focus)?;
            return Err(e);
        }

        info!("Mapped window {id:#x} on workspace {}", self.current_workspace().name());
        Ok(new)
    }

    // Undoes a map whose layout failed, so a retry starts from a clean slate.
    fn rollback_map<D: Display + ?Sized>(
        &mut self,
        display: &mut D,
        node: NodeId,
        previous_focus: Option<NodeId>,
    ) -> WMResult<()> {
        let Some(sibling) = self.detach(self.current, node)? else {
            return Ok(());
        };
        if let Some(focus) = previous_focus.filter(|focus| self.tree.contains(*focus)) {
            self.workspaces[self.current].set_focus(Some(focus));
        }
        if let Err(e) = self.configure_subtree(display, sibling) {
            warn!("Failed to restore layout after dropping {node:?}: {e}");
        }
        Ok(())
    }

    /// Lays out `node` at the rectangle its position in the tree gives it.
    fn configure_subtree<D: Display + ?Sized>(
        &mut self,
        display: &mut D,
        node: NodeId,
    ) -> WMResult<()> {
        let rect = self.tree.node_dimensions(node, self.screen)?;
        self.tree.configure_tree(display, node, rect)?;
        display.flush()?;
        Ok(())
    }

    fn insert(&mut self, new: NodeId) -> WMResult<NodeId> {
        let workspace = &self.workspaces[self.current];
        let (root, focus) = (workspace.root(), workspace.focus());
        let Some(root) = root else {
            self.workspaces[self.current].set_root(Some(new));
            self.tag_spaces.add_tag_space(TagSpace::new(new));
            return Ok(new);
        };

        let target = focus
            .filter(|focus| self.tree.contains(*focus))
            .unwrap_or(root);
        let container = self.tree.fork_node_with_ratio(
            target,
            new,
            self.config.new_window_split,
            self.config.split_ratio,
        )?;

        if target == root {
            self.workspaces[self.current].set_root(Some(container));
            self.tag_spaces.rescope(root, container);
        }
        Ok(container)
    }

    fn auto_tag(&mut self, node: NodeId) {
        let Some(root) = self.current_workspace().root() else {
            return;
        };
        let Some(space) = self.tag_spaces.find_tag_space_mut(root) else {
            warn!("Workspace root {root:?} has no tag space");
            return;
        };
        match space.first_free_name(&self.config.tag_alphabet) {
            Some(name) => space.add_tag(Tag::new(name, node)),
            None => trace!("No free tag left for {node:?}"),
        }
    }

    /// Removes an unmapped window from whichever workspace holds it. Returns false if the window
    /// was not managed.
    pub fn unmap_window<D: Display + ?Sized>(
        &mut self,
        display: &mut D,
        id: WindowId,
    ) -> WMResult<bool> {
        let Some((workspace_id, node)) = self.locate_window(id) else {
            trace!("Ignoring unmap of unmanaged window {id:#x}");
            return Ok(false);
        };

        let sibling = self.detach(workspace_id, node)?;
        match sibling {
            Some(sibling) if workspace_id == self.current => {
                self.configure_subtree(display, sibling)?;
            }
            Some(_) => {}
            None => debug!("Workspace {} is empty", self.workspaces[workspace_id].name()),
        }

        info!("Unmapped window {id:#x}");
        Ok(true)
    }

    /// Takes `node` out of a workspace's tree and frees it, keeping the workspace root, tag
    /// spaces and focus consistent. Returns the node promoted into its slot, or `None` when
    /// `node` was the root and the workspace is now empty.
    fn detach(&mut self, workspace_id: WorkspaceId, node: NodeId) -> WMResult<Option<NodeId>> {
        self.tag_spaces.forget_node(node);
        let root = self.workspaces[workspace_id].root();

        if root == Some(node) {
            self.tag_spaces.remove_tag_space(node);
            self.tree.remove_subtree(node)?;
            let workspace = &mut self.workspaces[workspace_id];
            workspace.set_root(None);
            workspace.set_focus(None);
            return Ok(None);
        }

        let parent = self
            .tree
            .parent(node)?
            .ok_or(LayoutError::NoParent(node))?;
        let removed = self.tree.unfork_node(node)?;
        let side = removed
            .side_of(node)
            .ok_or(LayoutError::BrokenLink(node))?;
        let sibling = removed.child(side.other());
        self.tree.remove_subtree(node)?;
        self.tag_spaces.forget_node(parent);

        if root == Some(parent) {
            self.workspaces[workspace_id].set_root(Some(sibling));
            self.tag_spaces.rescope(parent, sibling);
        }

        let focus = self.workspaces[workspace_id].focus();
        if focus.map_or(true, |focus| !self.tree.contains(focus)) {
            let next = self.tree.windows(sibling).next();
            self.workspaces[workspace_id].set_focus(next);
        }

        Ok(Some(sibling))
    }

    /// Destroys the focused window through the display and drops it from the layout.
    pub fn kill_focused<D: Display + ?Sized>(
        &mut self,
        display: &mut D,
    ) -> WMResult<Option<WindowId>> {
        let Some(id) = self.focused_window() else {
            return Ok(None);
        };
        display.destroy_window(id)?;
        self.unmap_window(display, id)?;
        Ok(Some(id))
    }

    pub fn focus_window(&mut self, id: WindowId) -> bool {
        match self.locate_window(id) {
            Some((workspace_id, node)) if workspace_id == self.current => {
                self.workspaces[self.current].set_focus(Some(node));
                true
            }
            _ => false,
        }
    }

    /// Moves focus to the neighbouring window along `split` on `side`. Focus stays put when
    /// there is no neighbour.
    pub fn focus_adjacent(&mut self, split: SplitType, side: ChildSide) -> Option<NodeId> {
        let focus = self.focus()?;
        let next = self.tree.adjacent_window(focus, split, side)?;
        self.workspaces[self.current].set_focus(Some(next));
        trace!("Focus {focus:?} -> {next:?}");
        Some(next)
    }

    /// Tags the focused node `name` in the current workspace.
    pub fn tag_focused(&mut self, name: char) -> WMResult<bool> {
        let workspace = self.current_workspace();
        let (Some(root), Some(focus)) = (workspace.root(), workspace.focus()) else {
            return Ok(false);
        };
        let space = self.tag_spaces.find_tag_space_mut(root).ok_or_else(|| {
            WMError::Error(format!("workspace root {root:?} has no tag space"))
        })?;
        space.add_tag(Tag::new(name, focus));
        Ok(true)
    }

    pub fn tagged_node(&self, name: char) -> Option<NodeId> {
        let root = self.current_workspace().root()?;
        self.tag_spaces.find_tagged_node(root, name)
    }

    /// Focuses the node tagged `name` in the current workspace.
    pub fn focus_tag(&mut self, name: char) -> Option<NodeId> {
        let node = self
            .tagged_node(name)
            .filter(|node| self.tree.contains(*node))?;
        self.workspaces[self.current].set_focus(Some(node));
        Some(node)
    }

    pub fn switch_workspace<D: Display + ?Sized>(
        &mut self,
        display: &mut D,
        id: WorkspaceId,
    ) -> WMResult<()> {
        if id >= self.workspaces.len() {
            return Err(WMError::WorkspaceNotFound(id));
        }
        self.current = id;
        debug!("Switched to workspace {}", self.current_workspace().name());
        self.relayout(display)
    }

    /// Destroys every window of a workspace and frees its tree. Returns the destroyed windows.
    pub fn close_workspace<D: Display + ?Sized>(
        &mut self,
        display: &mut D,
        id: WorkspaceId,
    ) -> WMResult<Vec<WindowId>> {
        let root = self
            .workspaces
            .get(id)
            .ok_or(WMError::WorkspaceNotFound(id))?
            .root();
        let Some(root) = root else {
            return Ok(Vec::new());
        };

        self.tree.kill_tree(display, root)?;
        display.flush()?;
        self.tag_spaces.remove_tag_space(root);
        let windows = self.tree.remove_subtree(root)?;

        let workspace = &mut self.workspaces[id];
        workspace.set_root(None);
        workspace.set_focus(None);
        info!("Closed {} windows on workspace {}", windows.len(), workspace.name());
        Ok(windows)
    }

    /// Lays out the whole current workspace.
    pub fn relayout<D: Display + ?Sized>(&mut self, display: &mut D) -> WMResult<()> {
        if let Some(root) = self.current_workspace().root() {
            self.tree.configure_tree(display, root, self.screen)?;
            display.flush()?;
        }
        Ok(())
    }

    pub fn set_screen<D: Display + ?Sized>(
        &mut self,
        display: &mut D,
        screen: Rect,
    ) -> WMResult<()> {
        self.screen = screen;
        self.relayout(display)
    }

    /// YAML dump of the current workspace's tree.
    pub fn debug_layout(&self) -> WMResult<String> {
        let Some(root) = self.current_workspace().root() else {
            return Ok(String::from("empty\n"));
        };
        let value = serialize_tree(&self.tree, root, self.screen)?;
        serde_yaml::to_string(&value).map_err(|e| WMError::Error(e.to_string()))
    }
}
