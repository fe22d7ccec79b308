//! Query engine shared by every variant.
//!
//! Search helpers take a `compare(node, key) -> i32` accessor: negative when
//! the node orders before `key`, zero on a tie, positive after. Placement
//! helpers take `compare_link(new, existing) -> i32` instead.
//!
//! Nothing here recurses along tree height: traversal follows parent edges
//! and depth measurement uses a heap stack, so degenerate shapes (a fresh
//! splay chain, a treap with sorted priorities) are safe.

pub mod clone;

use crate::error::{ForestError, ForestResult};
use crate::link::{first, get_l, get_p, get_r, link_node, next, set_l, set_p, set_r};
use crate::types::{Balance, Node, Root, Side};

pub use clone::{clone_into, clone_range_into};

/// Left-most node comparing equal to `key`.
pub fn find<N, Q, C>(arena: &[N], root: &Root, key: &Q, compare: C) -> Option<u32>
where
    N: Node,
    Q: ?Sized,
    C: Fn(&N, &Q) -> i32,
{
    let mut curr = root.node;
    let mut found = None;
    while let Some(i) = curr {
        let cmp = compare(&arena[i as usize], key);
        if cmp < 0 {
            curr = get_r(arena, i);
        } else {
            if cmp == 0 {
                found = Some(i);
            } else if found.is_some() {
                break;
            }
            curr = get_l(arena, i);
        }
    }
    found
}

/// First node that does not order before `key`.
pub fn lower_bound<N, Q, C>(arena: &[N], root: &Root, key: &Q, compare: C) -> Option<u32>
where
    N: Node,
    Q: ?Sized,
    C: Fn(&N, &Q) -> i32,
{
    let mut curr = root.node;
    let mut lb = None;
    while let Some(i) = curr {
        if compare(&arena[i as usize], key) >= 0 {
            lb = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    lb
}

/// First node that orders after `key`.
pub fn upper_bound<N, Q, C>(arena: &[N], root: &Root, key: &Q, compare: C) -> Option<u32>
where
    N: Node,
    Q: ?Sized,
    C: Fn(&N, &Q) -> i32,
{
    let mut curr = root.node;
    let mut ub = None;
    while let Some(i) = curr {
        if compare(&arena[i as usize], key) > 0 {
            ub = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    ub
}

/// `(lower_bound, upper_bound)` in one pass.
///
/// Both bounds share the descent until the first node equal to `key`; from
/// there the lower bound continues into its left subtree and the upper bound
/// into its right subtree.
pub fn lower_upper_bound<N, Q, C>(
    arena: &[N],
    root: &Root,
    key: &Q,
    compare: C,
) -> (Option<u32>, Option<u32>)
where
    N: Node,
    Q: ?Sized,
    C: Fn(&N, &Q) -> i32,
{
    let mut curr = root.node;
    let mut lb = None;
    let mut ub = None;
    while let Some(i) = curr {
        let cmp = compare(&arena[i as usize], key);
        if cmp < 0 {
            curr = get_r(arena, i);
        } else if cmp > 0 {
            lb = Some(i);
            ub = Some(i);
            curr = get_l(arena, i);
        } else {
            let left = Root::from(get_l(arena, i));
            let right = Root::from(get_r(arena, i));
            lb = lower_bound(arena, &left, key, &compare).or(Some(i));
            ub = upper_bound(arena, &right, key, &compare).or(ub);
            break;
        }
    }
    (lb, ub)
}

/// Number of nodes comparing equal to `key`; O(log n + k).
pub fn count<N, Q, C>(arena: &[N], root: &Root, key: &Q, compare: C) -> usize
where
    N: Node,
    Q: ?Sized,
    C: Fn(&N, &Q) -> i32,
{
    let (mut lb, ub) = lower_upper_bound(arena, root, key, compare);
    let mut c = 0;
    while lb != ub {
        let Some(i) = lb else { break };
        c += 1;
        lb = next(arena, i);
    }
    c
}

/// Number of nodes in the tree.
pub fn size<N: Node>(arena: &[N], root: &Root) -> usize {
    let mut n = 0;
    let mut curr = first(arena, root.node);
    while let Some(i) = curr {
        n += 1;
        curr = next(arena, i);
    }
    n
}

/// Length of the longest root-to-leaf path, counted in nodes.
pub fn depth_max<N: Node>(arena: &[N], root: &Root) -> usize {
    depth(arena, root, true)
}

/// Length of the shortest path from the root to a missing child, counted in
/// nodes.
pub fn depth_min<N: Node>(arena: &[N], root: &Root) -> usize {
    depth(arena, root, false)
}

fn depth<N: Node>(arena: &[N], root: &Root, longest: bool) -> usize {
    let Some(top) = root.node else {
        return 0;
    };
    let mut best = if longest { 0 } else { usize::MAX };
    let mut stack = vec![(top, 1usize)];
    while let Some((i, d)) = stack.pop() {
        let l = get_l(arena, i);
        let r = get_r(arena, i);
        if longest {
            if l.is_none() && r.is_none() {
                best = best.max(d);
            }
        } else if l.is_none() || r.is_none() {
            best = best.min(d);
            continue;
        }
        stack.extend(l.map(|l| (l, d + 1)));
        stack.extend(r.map(|r| (r, d + 1)));
    }
    best
}

/// In-order visit of every node.
pub fn visit<N, F>(arena: &[N], root: &Root, mut f: F)
where
    N: Node,
    F: FnMut(u32, &N),
{
    let mut curr = first(arena, root.node);
    while let Some(i) = curr {
        f(i, &arena[i as usize]);
        curr = next(arena, i);
    }
}

/// In-order visit that stops at the first `false`; returns whether every
/// node was visited.
pub fn visit_cond<N, F>(arena: &[N], root: &Root, mut f: F) -> bool
where
    N: Node,
    F: FnMut(u32, &N) -> bool,
{
    let mut curr = first(arena, root.node);
    while let Some(i) = curr {
        if !f(i, &arena[i as usize]) {
            return false;
        }
        curr = next(arena, i);
    }
    true
}

/// Tears down the subtree under `node`, leaves first.
///
/// Each node is detached from its parent and has its links cleared before
/// `destroy` sees it. The slot that referenced `node` is not touched; use
/// [`clear`] to tear down a whole tree.
pub fn destroy<N, D>(arena: &mut [N], node: Option<u32>, mut destroy: D)
where
    N: Node,
    D: FnMut(u32, &mut N),
{
    let Some(top) = node else {
        return;
    };
    let mut curr = Some(top);
    while let Some(i) = curr {
        if let Some(l) = get_l(arena, i) {
            curr = Some(l);
            continue;
        }
        if let Some(r) = get_r(arena, i) {
            curr = Some(r);
            continue;
        }
        let p = if i == top { None } else { get_p(arena, i) };
        if let Some(p) = p {
            if get_l(arena, p) == Some(i) {
                set_l(arena, p, None);
            } else {
                set_r(arena, p, None);
            }
        }
        set_p(arena, i, None);
        destroy(i, &mut arena[i as usize]);
        curr = p;
    }
}

/// Destroys every node and empties `root`.
pub fn clear<N, D>(arena: &mut [N], root: &mut Root, destroy_node: D)
where
    N: Node,
    D: FnMut(u32, &mut N),
{
    destroy(arena, root.node.take(), destroy_node);
}

/// Finds the empty slot where `node` belongs.
///
/// Ties go right, after existing equals, so duplicates keep insertion order.
/// With `unique`, a tie returns `Err(existing)` instead.
fn insert_slot<N, C>(
    arena: &[N],
    root: &Root,
    node: u32,
    compare_link: &C,
    unique: bool,
) -> Result<(Option<u32>, Side), u32>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let Some(mut curr) = root.node else {
        return Ok((None, Side::Left));
    };
    loop {
        let cmp = compare_link(&arena[node as usize], &arena[curr as usize]);
        if cmp == 0 && unique {
            return Err(curr);
        }
        let (child, side) = if cmp < 0 {
            (get_l(arena, curr), Side::Left)
        } else {
            (get_r(arena, curr), Side::Right)
        };
        match child {
            Some(c) => curr = c,
            None => return Ok((Some(curr), side)),
        }
    }
}

pub(crate) fn link_and_rebalance<N, B>(
    arena: &mut [N],
    root: &mut Root,
    node: u32,
    parent: Option<u32>,
    side: Side,
) where
    N: Node,
    B: Balance<N>,
{
    B::init(&mut arena[node as usize]);
    link_node(arena, node, parent, side, root);
    B::insert_rebalance(arena, node, root);
}

/// Places `node` by `compare_link` and rebalances with `B`. Equal keys are
/// allowed.
pub fn insert<N, B, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C)
where
    N: Node,
    B: Balance<N>,
    C: Fn(&N, &N) -> i32,
{
    if let Ok((parent, side)) = insert_slot(arena, root, node, &compare_link, false) {
        link_and_rebalance::<N, B>(arena, root, node, parent, side);
    }
}

/// Like [`insert`], but refuses a key that is already present. Returns
/// `false` and leaves the tree untouched in that case.
pub fn insert_unique<N, B, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C) -> bool
where
    N: Node,
    B: Balance<N>,
    C: Fn(&N, &N) -> i32,
{
    match insert_slot(arena, root, node, &compare_link, true) {
        Ok((parent, side)) => {
            link_and_rebalance::<N, B>(arena, root, node, parent, side);
            true
        }
        Err(_) => false,
    }
}

/// Erases every node in `[begin, end)` (in-order) and destroys it.
///
/// `end` must not precede `begin`; `None` means "to the last node". The
/// successor of each victim is captured before the erase, since rotations
/// never change the in-order sequence of the survivors.
pub fn erase_range<N, B, D>(
    arena: &mut [N],
    root: &mut Root,
    begin: Option<u32>,
    end: Option<u32>,
    mut destroy_node: D,
) -> usize
where
    N: Node,
    B: Balance<N>,
    D: FnMut(u32, &mut N),
{
    let mut erased = 0;
    let mut curr = begin;
    while curr != end {
        let Some(i) = curr else { break };
        curr = next(arena, i);
        B::erase(arena, i, root);
        destroy_node(i, &mut arena[i as usize]);
        erased += 1;
    }
    erased
}

/// Erases every node comparing equal to `key`; returns how many were erased.
pub fn erase_equal<N, B, Q, C, D>(
    arena: &mut [N],
    root: &mut Root,
    key: &Q,
    compare: C,
    destroy_node: D,
) -> usize
where
    N: Node,
    B: Balance<N>,
    Q: ?Sized,
    C: Fn(&N, &Q) -> i32,
    D: FnMut(u32, &mut N),
{
    let (lb, ub) = lower_upper_bound(arena, root, key, compare);
    erase_range::<N, B, D>(arena, root, lb, ub, destroy_node)
}

/// Checks the structure every variant shares: the root has no parent, every
/// child points back at its parent and the in-order sequence is sorted by
/// `compare_link`.
pub fn assert_tree<N, C>(arena: &[N], root: &Root, compare_link: C) -> ForestResult<()>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let Some(top) = root.node else {
        return Ok(());
    };
    if get_p(arena, top).is_some() {
        return Err(ForestError::Invariant(format!("root {top} has a parent")));
    }

    let mut prev: Option<u32> = None;
    let mut curr = first(arena, Some(top));
    while let Some(i) = curr {
        for (child, side) in [(get_l(arena, i), "left"), (get_r(arena, i), "right")] {
            if let Some(c) = child {
                if get_p(arena, c) != Some(i) {
                    return Err(ForestError::Invariant(format!(
                        "{side} child {c} of {i} does not point back"
                    )));
                }
            }
        }
        if let Some(pr) = prev {
            if compare_link(&arena[pr as usize], &arena[i as usize]) > 0 {
                return Err(ForestError::Invariant(format!(
                    "node {pr} orders after its successor {i}"
                )));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }
    Ok(())
}
