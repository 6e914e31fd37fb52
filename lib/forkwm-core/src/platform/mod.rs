pub use common::*;
pub use traits::*;

mod common;
pub mod mock;
mod traits;
