use crate::platform::{PlatformResult, Rect, WindowId};

/// The display server seen from the layout core. The core only ever asks it to place a window
/// and to destroy one; everything else (event handling, key grabs) lives outside.
pub trait Display {
    /// Move and resize a window to exactly `rect`.
    fn configure_window(&mut self, id: WindowId, rect: &Rect) -> PlatformResult<()>;

    /// Destroy a window and release whatever the display holds for it.
    fn destroy_window(&mut self, id: WindowId) -> PlatformResult<()>;

    /// Push any batched requests to the server. Layout does not wait for acknowledgement.
    fn flush(&mut self) -> PlatformResult<()> {
        Ok(())
    }
}
