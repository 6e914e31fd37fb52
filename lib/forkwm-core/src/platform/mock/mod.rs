use crate::platform::{Display, PlatformErrorType, PlatformResult, Rect, WindowId};
use std::collections::HashSet;

/// A request the core issued to the display.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    Configure(WindowId, Rect),
    Destroy(WindowId),
    Flush,
}

/// Records every request instead of talking to a server. Windows listed in `bad_windows` fail
/// the way a vanished X window would.
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub commands: Vec<DisplayCommand>,
    pub bad_windows: HashSet<WindowId>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rectangle most recently assigned to `id`.
    pub fn geometry(&self, id: WindowId) -> Option<Rect> {
        self.commands.iter().rev().find_map(|command| match command {
            DisplayCommand::Configure(window, rect) if *window == id => Some(*rect),
            _ => None,
        })
    }

    pub fn configured(&self) -> Vec<(WindowId, Rect)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DisplayCommand::Configure(id, rect) => Some((*id, *rect)),
                _ => None,
            })
            .collect()
    }

    pub fn destroyed(&self) -> Vec<WindowId> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DisplayCommand::Destroy(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Display for MockDisplay {
    fn configure_window(&mut self, id: WindowId, rect: &Rect) -> PlatformResult<()> {
        if self.bad_windows.contains(&id) {
            return Err(PlatformErrorType::BadWindow(id).into());
        }
        self.commands.push(DisplayCommand::Configure(id, *rect));
        Ok(())
    }

    fn destroy_window(&mut self, id: WindowId) -> PlatformResult<()> {
        if self.bad_windows.contains(&id) {
            return Err(PlatformErrorType::BadWindow(id).into());
        }
        self.commands.push(DisplayCommand::Destroy(id));
        Ok(())
    }

    fn flush(&mut self) -> PlatformResult<()> {
        self.commands.push(DisplayCommand::Flush);
        Ok(())
    }
}
