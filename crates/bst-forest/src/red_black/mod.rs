//! Red/black variant.

pub mod types;
pub mod util;

pub use types::{RbNode, RbNodeLike};
pub use util::*;
