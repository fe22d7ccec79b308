//! Link primitive: rotation, in-order traversal and splicing over `p / l / r`
//! edges.
//!
//! Every function takes the arena and node indices. Rotations and splices
//! keep the [`Root`] handle current when the top of the tree changes; they
//! never look at variant metadata.

pub mod splice;

use crate::types::{Node, Root, Side};

pub use splice::{splice, Splice};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Whether `node` is the left child of `parent`.
#[inline]
pub(crate) fn is_left_of<N: Node>(arena: &[N], parent: u32, node: u32) -> bool {
    get_l(arena, parent) == Some(node)
}

/// Points the slot that held `old` (a child of `parent`, or the root) at
/// `new`. The parent edge of `new` is left to the caller.
pub fn replace_child<N: Node>(
    arena: &mut [N],
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
    root: &mut Root,
) {
    match parent {
        Some(p) => {
            if is_left_of(arena, p, old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
        }
        None => root.node = new,
    }
}

/// Resets `node`'s links and attaches it as the `side` child of `parent`, or
/// as the root when `parent` is `None`. The target slot must be empty.
pub fn link_node<N: Node>(
    arena: &mut [N],
    node: u32,
    parent: Option<u32>,
    side: Side,
    root: &mut Root,
) {
    set_p(arena, node, parent);
    set_l(arena, node, None);
    set_r(arena, node, None);
    match parent {
        Some(p) => match side {
            Side::Left => {
                debug_assert!(get_l(arena, p).is_none(), "left slot of {p} is occupied");
                set_l(arena, p, Some(node));
            }
            Side::Right => {
                debug_assert!(get_r(arena, p).is_none(), "right slot of {p} is occupied");
                set_r(arena, p, Some(node));
            }
        },
        None => {
            debug_assert!(root.is_empty(), "linking a second root");
            root.node = Some(node);
        }
    }
}

/// Rotates `x` down to the left; its right child takes its place.
///
/// ```text
///     |               |
///     X               Y
///    / \             / \
///   T1  Y    -->    X   T3
///      / \         / \
///     T2 T3      T1  T2
/// ```
///
/// `x` must have a right child.
pub fn rotate_left<N: Node>(arena: &mut [N], x: u32, root: &mut Root) {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    let parent = get_p(arena, x);

    let t2 = get_l(arena, y);
    set_r(arena, x, t2);
    if let Some(t2) = t2 {
        set_p(arena, t2, Some(x));
    }
    set_l(arena, y, Some(x));
    set_p(arena, y, parent);
    replace_child(arena, parent, x, Some(y), root);
    set_p(arena, x, Some(y));
}

/// Rotates `x` down to the right; its left child takes its place.
///
/// ```text
///       |            |
///       X            Y
///      / \          / \
///     Y  T1  -->  T2   X
///    / \              / \
///   T2 T3            T3  T1
/// ```
///
/// `x` must have a left child.
pub fn rotate_right<N: Node>(arena: &mut [N], x: u32, root: &mut Root) {
    let y = get_l(arena, x).expect("rotate_right requires a left child");
    let parent = get_p(arena, x);

    let t3 = get_r(arena, y);
    set_l(arena, x, t3);
    if let Some(t3) = t3 {
        set_p(arena, t3, Some(x));
    }
    set_r(arena, y, Some(x));
    set_p(arena, y, parent);
    replace_child(arena, parent, x, Some(y), root);
    set_p(arena, x, Some(y));
}

/// Leftmost node of the subtree rooted at `node`.
pub fn first<N: Node>(arena: &[N], node: Option<u32>) -> Option<u32> {
    let mut curr = node?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node of the subtree rooted at `node`.
pub fn last<N: Node>(arena: &[N], node: Option<u32>) -> Option<u32> {
    let mut curr = node?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor; `None` past the last node.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    // Climb while we are a right child; the first left-edge ancestor follows us.
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) != Some(curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}

/// In-order predecessor; `None` before the first node.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) != Some(curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}
