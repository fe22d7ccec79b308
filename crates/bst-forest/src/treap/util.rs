use crate::error::{ForestError, ForestResult};
use crate::link::{get_l, get_p, get_r, is_left_of, rotate_left, rotate_right, splice};
use crate::types::{Balance, Root};
use crate::util;

use super::types::TreapNodeLike;

/// Heap-priority discipline. Priorities are left to the caller, so `init`
/// keeps whatever the node carries.
#[derive(Clone, Copy, Debug, Default)]
pub struct Treap;

impl<N: TreapNodeLike> Balance<N> for Treap {
    fn insert_rebalance(arena: &mut [N], node: u32, root: &mut Root) {
        insert_rebalance(arena, node, root);
    }

    fn erase(arena: &mut [N], node: u32, root: &mut Root) {
        erase(arena, node, root);
    }
}

#[inline]
fn priority<N: TreapNodeLike>(arena: &[N], i: u32) -> u64 {
    arena[i as usize].priority()
}

/// Rotates a freshly linked leaf up while its priority is strictly below its
/// parent's.
pub fn insert_rebalance<N: TreapNodeLike>(arena: &mut [N], node: u32, root: &mut Root) {
    while let Some(p) = get_p(arena, node) {
        if priority(arena, node) >= priority(arena, p) {
            break;
        }
        if is_left_of(arena, p, node) {
            rotate_right(arena, p, root);
        } else {
            rotate_left(arena, p, root);
        }
    }
}

/// Unlinks `node`.
///
/// A node with two children is first rotated down, always lifting the child
/// with the smaller priority (the left one on a tie), until it has at most
/// one child. Splicing it out then keeps the heap order intact.
pub fn erase<N: TreapNodeLike>(arena: &mut [N], node: u32, root: &mut Root) {
    while let (Some(l), Some(r)) = (get_l(arena, node), get_r(arena, node)) {
        if priority(arena, l) <= priority(arena, r) {
            rotate_right(arena, node, root);
        } else {
            rotate_left(arena, node, root);
        }
    }
    splice(arena, node, root, |_, _, _| {});
}

/// Places `node` (duplicates allowed) and restores heap order.
pub fn insert<N, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C)
where
    N: TreapNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::insert::<N, Treap, C>(arena, root, node, compare_link);
}

/// Places `node` unless an equal key exists.
pub fn insert_unique<N, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C) -> bool
where
    N: TreapNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::insert_unique::<N, Treap, C>(arena, root, node, compare_link)
}

/// Validates links, order and the heap property.
pub fn assert_treap<N, C>(arena: &[N], root: &Root, compare_link: C) -> ForestResult<()>
where
    N: TreapNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::assert_tree(arena, root, compare_link)?;
    let mut err = None;
    util::visit_cond(arena, root, |i, node| match get_p(arena, i) {
        Some(p) if priority(arena, p) > node.priority() => {
            err = Some(format!(
                "node {i} has priority {} below its parent {p} ({})",
                node.priority(),
                priority(arena, p)
            ));
            false
        }
        _ => true,
    });
    match err {
        Some(msg) => Err(ForestError::Invariant(msg)),
        None => Ok(()),
    }
}
