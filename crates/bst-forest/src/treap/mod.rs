//! Treap variant: a search tree over keys that is also a min-heap over
//! caller-supplied priorities.
//!
//! Priorities normally come from [`PrioritySource`](crate::priority::PrioritySource).
//! With random priorities the expected depth is logarithmic; sorted
//! priorities produce a chain, which the query engine tolerates.

pub mod types;
pub mod util;

pub use types::{TreapNode, TreapNodeLike};
pub use util::*;
