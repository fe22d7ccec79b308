//! Rank-balanced (weak AVL) variant.
//!
//! Each node stores a rank; a missing child has rank -1. Every rank
//! difference between a parent and a child is 1 or 2, a node with two
//! children is never 2,2 and leaves have rank 0. Ranks are therefore subtree
//! heights and the shape stays AVL through inserts and erases. Insert stops
//! after at most two rotations; erase may rotate once per level on its way up.

pub mod types;
pub mod util;

pub use types::{WavlNode, WavlNodeLike};
pub use util::*;
