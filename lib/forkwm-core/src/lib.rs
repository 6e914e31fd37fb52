use crate::config::ConfigError;
use crate::layouts::LayoutError;
use crate::platform::PlatformError;
use crate::wm::WMError;

pub mod config;
pub mod layouts;
pub mod paths;
pub mod platform;
pub mod tags;
pub mod wm;
pub mod workspace;

pub use config::Config;
pub use wm::WindowManager;

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}

#[derive(Debug)]
pub enum ForkWMFatalError {
    Error(String),
    Config(ConfigError),
    Layout(LayoutError),
    PlatformError(PlatformError),
}

pub type ForkWMResult<T> = Result<T, ForkWMFatalError>;

impl std::fmt::Display for ForkWMFatalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForkWMFatalError::Error(message) => write!(f, "{message}"),
            ForkWMFatalError::Config(e) => write!(f, "{e}"),
            ForkWMFatalError::Layout(e) => write!(f, "{e}"),
            ForkWMFatalError::PlatformError(e) => write!(f, "{e}"),
        }
    }
}

impl From<ConfigError> for ForkWMFatalError {
    fn from(error: ConfigError) -> Self {
        ForkWMFatalError::Config(error)
    }
}

impl From<LayoutError> for ForkWMFatalError {
    fn from(error: LayoutError) -> Self {
        ForkWMFatalError::Layout(error)
    }
}

impl From<PlatformError> for ForkWMFatalError {
    fn from(error: PlatformError) -> Self {
        ForkWMFatalError::PlatformError(error)
    }
}

impl From<WMError> for ForkWMFatalError {
    fn from(error: WMError) -> Self {
        match error {
            WMError::Layout(e) => e.into(),
            WMError::Platform(e) => e.into(),
            other => ForkWMFatalError::Error(other.to_string()),
        }
    }
}
