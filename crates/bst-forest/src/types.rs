//! Node and root definitions shared by every tree variant.
//!
//! Nodes live in a caller-owned arena (`[N]` / `Vec<N>`). Every structural
//! edge is an `Option<u32>` index into that arena, so the parent back-edge
//! never forms an ownership cycle and rotations stay O(1) index surgery.

/// Structural links (`p`, `l`, `r`) of a tree node.
///
/// The link primitive only ever touches these three edges; variant metadata
/// (color, rank, priority) is reached through the variant traits.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Implements [`Node`] for a struct with `p`, `l` and `r` fields.
#[macro_export]
macro_rules! impl_node {
    ($ty:ident $(< $($gen:ident),+ >)?) => {
        impl $(< $($gen),+ >)? $crate::types::Node for $ty $(< $($gen),+ >)? {
            fn p(&self) -> Option<u32> {
                self.p
            }

            fn l(&self) -> Option<u32> {
                self.l
            }

            fn r(&self) -> Option<u32> {
                self.r
            }

            fn set_p(&mut self, v: Option<u32>) {
                self.p = v;
            }

            fn set_l(&mut self, v: Option<u32>) {
                self.l = v;
            }

            fn set_r(&mut self, v: Option<u32>) {
                self.r = v;
            }
        }
    };
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Handle to the top node of a tree; empty tree ⇔ `node` is `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Root {
    pub node: Option<u32>,
}

impl Root {
    pub const fn new() -> Self {
        Self { node: None }
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Exchanges the trees referenced by two roots of the same arena.
    pub fn swap(&mut self, other: &mut Root) {
        std::mem::swap(&mut self.node, &mut other.node);
    }
}

impl From<Option<u32>> for Root {
    fn from(node: Option<u32>) -> Self {
        Self { node }
    }
}

/// A rebalancing discipline.
///
/// Implemented by the four variants ([`RedBlack`](crate::red_black::RedBlack),
/// [`RankBalanced`](crate::wavl::RankBalanced), [`Splay`](crate::splay::Splay),
/// [`Treap`](crate::treap::Treap)) so that placement, range erase and range
/// clone in [`util`](crate::util) are written once and dispatched statically.
pub trait Balance<N: Node> {
    /// Resets balance metadata of a node that is about to be linked as a leaf.
    fn init(_node: &mut N) {}

    /// Restores the variant invariant after `node` was linked as a leaf.
    fn insert_rebalance(arena: &mut [N], node: u32, root: &mut Root);

    /// Unlinks `node` and restores the variant invariant.
    fn erase(arena: &mut [N], node: u32, root: &mut Root);

    /// Hook for a successful lookup of `node`; only splay trees react.
    fn access(_arena: &mut [N], _node: u32, _root: &mut Root) {}
}
