use crate::layouts::SplitType;
use serde::{Deserialize, Serialize};
use std::backtrace::Backtrace;
use std::fmt::Debug;

#[derive(Debug)]
pub struct PlatformError {
    pub error_type: PlatformErrorType,
    pub backtrace: Backtrace,
}

#[derive(Debug)]
pub enum PlatformErrorType {
    /// The display server no longer knows about this window.
    BadWindow(WindowId),
}

impl From<PlatformErrorType> for PlatformError {
    fn from(error_type: PlatformErrorType) -> Self {
        Self {
            error_type,
            backtrace: Backtrace::capture(),
        }
    }
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_type {
            PlatformErrorType::BadWindow(id) => write!(f, "bad window: {id:#x}"),
        }
    }
}

impl std::error::Error for PlatformError {}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Display-server window identifier (an X11 `xcb_window_t`).
pub type WindowId = u32;

/// Screen rectangle in floating point coordinates. Only ever passed down during layout, never
/// stored on tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Splits the rectangle along the axis `split` divides. The first share is `ratio` of the
    /// axis, the second is whatever remains, so the two always add up to the full extent.
    pub fn split(&self, split: SplitType, ratio: f64) -> (Rect, Rect) {
        match split {
            SplitType::Vertical => {
                let first = self.width * ratio;
                (
                    Rect::new(self.x, self.y, first, self.height),
                    Rect::new(self.x + first, self.y, self.width - first, self.height),
                )
            }
            SplitType::Horizontal => {
                let first = self.height * ratio;
                (
                    Rect::new(self.x, self.y, self.width, first),
                    Rect::new(self.x, self.y + first, self.width, self.height - first),
                )
            }
        }
    }
}
