pub use config::*;
pub use config_serializer::*;

#[allow(clippy::module_inception)]
mod config;
mod config_serializer;
