//! Splay variant: every insert and lookup moves its node to the root.
//!
//! Splay nodes carry no balance metadata. A splay tree can degenerate into a
//! chain; the query engine never recurses, so that stays safe.

pub mod types;
pub mod util;

pub use types::SplayNode;
pub use util::*;
