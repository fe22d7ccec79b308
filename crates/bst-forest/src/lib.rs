//! Arena-based intrusive balanced binary search trees.
//!
//! One linkage primitive (parent / left / right edges, rotations, in-order
//! traversal) and one query engine are shared by four rebalancing
//! disciplines: red/black, rank-balanced (weak AVL), splay and treap.
//!
//! Nodes live in a caller-owned `Vec<N>` / `[N]` arena and point at each other
//! through `Option<u32>` indices. The library never allocates or frees nodes:
//! callers pass comparison, clone and destroy callbacks and own all payload.
//! [`Forest`] bundles an arena with a tree for callers that want ownership
//! handled for them.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] trait, [`Root`] handle, [`Balance`] strategy trait |
//! | [`link`] | rotations, `first` / `last` / `next` / `prev`, [`link::splice`] |
//! | [`util`] | find, bounds, count, clone, visit, destroy, generic insert / erase |
//! | [`red_black`] | [`RedBlack`] strategy and [`RbNode`] |
//! | [`wavl`] | [`RankBalanced`] strategy and [`WavlNode`] |
//! | [`splay`] | [`Splay`] strategy and [`SplayNode`] |
//! | [`treap`] | [`Treap`] strategy and [`TreapNode`] |
//! | [`forest`] | owning [`Forest`] container |
//! | [`pool`] | bulk root allocation, optional leak accounting |
//! | [`priority`] | seedable [`PrioritySource`] for treap priorities |
//!
//! # Example
//!
//! ```
//! use bst_forest::red_black::{assert_red_black_tree, insert, RbNode};
//! use bst_forest::{util, Root};
//!
//! let cmp = |a: &RbNode<i32, ()>, b: &RbNode<i32, ()>| a.k.cmp(&b.k) as i32;
//! let mut arena: Vec<_> = [5, 3, 8].into_iter().map(|k| RbNode::new(k, ())).collect();
//! let mut root = Root::new();
//! for i in 0..arena.len() as u32 {
//!     insert(&mut arena, &mut root, i, cmp);
//! }
//! assert!(assert_red_black_tree(&arena, &root, cmp).is_ok());
//! assert_eq!(util::find(&arena, &root, &8, |n, k| n.k.cmp(k) as i32), Some(2));
//! ```

pub mod error;
pub mod forest;
pub mod link;
pub mod pool;
pub mod priority;
pub mod red_black;
pub mod splay;
pub mod treap;
pub mod types;
pub mod util;
pub mod wavl;

pub use error::{ForestError, ForestResult};
pub use forest::{Forest, RbForest, SplayForest, TreapForest, WavlForest};
pub use link::{first, last, next, prev, rotate_left, rotate_right};
pub use priority::PrioritySource;
pub use red_black::{RbNode, RedBlack};
pub use splay::{Splay, SplayNode};
pub use treap::{Treap, TreapNode};
pub use types::{Balance, Node, Root, Side};
pub use wavl::{RankBalanced, WavlNode};
