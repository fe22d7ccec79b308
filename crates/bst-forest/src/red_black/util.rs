use crate::error::{ForestError, ForestResult};
use crate::link::{get_l, get_p, get_r, is_left_of, rotate_left, rotate_right, splice};
use crate::types::{Balance, Root};
use crate::util;

use super::types::RbNodeLike;

/// Red/black balancing discipline.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedBlack;

impl<N: RbNodeLike> Balance<N> for RedBlack {
    fn init(node: &mut N) {
        node.set_black(false);
    }

    fn insert_rebalance(arena: &mut [N], node: u32, root: &mut Root) {
        insert_rebalance(arena, node, root);
    }

    fn erase(arena: &mut [N], node: u32, root: &mut Root) {
        erase(arena, node, root);
    }
}

#[inline]
fn is_black<N: RbNodeLike>(arena: &[N], i: Option<u32>) -> bool {
    // Missing children are black.
    i.map_or(true, |i| arena[i as usize].is_black())
}

#[inline]
fn set_black<N: RbNodeLike>(arena: &mut [N], i: u32, black: bool) {
    arena[i as usize].set_black(black);
}

/// Repairs the tree after `node` was linked as a red leaf.
pub fn insert_rebalance<N: RbNodeLike>(arena: &mut [N], node: u32, root: &mut Root) {
    set_black(arena, node, false);
    let mut n = node;
    while let Some(p) = get_p(arena, n) {
        if is_black(arena, Some(p)) {
            break;
        }
        let g = get_p(arena, p).expect("red parent is never the root");
        if is_left_of(arena, g, p) {
            let u = get_r(arena, g);
            if !is_black(arena, u) {
                log::trace!("rb insert: recolor under {g}");
                set_black(arena, p, true);
                set_black(arena, u.expect("red uncle exists"), true);
                set_black(arena, g, false);
                n = g;
                continue;
            }
            let mut top = p;
            if !is_left_of(arena, p, n) {
                rotate_left(arena, p, root);
                top = n;
            }
            set_black(arena, top, true);
            set_black(arena, g, false);
            rotate_right(arena, g, root);
        } else {
            let u = get_l(arena, g);
            if !is_black(arena, u) {
                log::trace!("rb insert: recolor under {g}");
                set_black(arena, p, true);
                set_black(arena, u.expect("red uncle exists"), true);
                set_black(arena, g, false);
                n = g;
                continue;
            }
            let mut top = p;
            if is_left_of(arena, p, n) {
                rotate_right(arena, p, root);
                top = n;
            }
            set_black(arena, top, true);
            set_black(arena, g, false);
            rotate_left(arena, g, root);
        }
        break;
    }
    if let Some(r) = root.node {
        set_black(arena, r, true);
    }
}

/// Unlinks `node` and restores the red/black invariant.
///
/// With two children the successor takes over `node`'s color, so the color
/// left on `node` is that of the slot that physically disappeared. Only a
/// black slot leaves a black-height deficit to fix.
pub fn erase<N: RbNodeLike>(arena: &mut [N], node: u32, root: &mut Root) {
    let vacancy = splice(arena, node, root, |arena, node, scor| {
        let node_black = arena[node as usize].is_black();
        let scor_black = arena[scor as usize].is_black();
        set_black(arena, node, scor_black);
        set_black(arena, scor, node_black);
    });
    if !arena[node as usize].is_black() {
        return;
    }

    let mut x = vacancy.child;
    let mut parent = vacancy.parent;
    let mut left = vacancy.left;
    while x != root.node && is_black(arena, x) {
        let Some(p) = parent else { break };
        if left {
            let mut w = get_r(arena, p).expect("double-black slot has a sibling");
            if !is_black(arena, Some(w)) {
                set_black(arena, w, true);
                set_black(arena, p, false);
                rotate_left(arena, p, root);
                w = get_r(arena, p).expect("double-black slot has a sibling");
            }
            if is_black(arena, get_l(arena, w)) && is_black(arena, get_r(arena, w)) {
                set_black(arena, w, false);
                x = Some(p);
                parent = get_p(arena, p);
                left = parent.is_some_and(|pp| is_left_of(arena, pp, p));
                continue;
            }
            if is_black(arena, get_r(arena, w)) {
                set_black(arena, get_l(arena, w).expect("red nephew exists"), true);
                set_black(arena, w, false);
                rotate_right(arena, w, root);
                w = get_r(arena, p).expect("double-black slot has a sibling");
            }
            let p_black = arena[p as usize].is_black();
            set_black(arena, w, p_black);
            set_black(arena, p, true);
            set_black(arena, get_r(arena, w).expect("red nephew exists"), true);
            rotate_left(arena, p, root);
        } else {
            let mut w = get_l(arena, p).expect("double-black slot has a sibling");
            if !is_black(arena, Some(w)) {
                set_black(arena, w, true);
                set_black(arena, p, false);
                rotate_right(arena, p, root);
                w = get_l(arena, p).expect("double-black slot has a sibling");
            }
            if is_black(arena, get_l(arena, w)) && is_black(arena, get_r(arena, w)) {
                set_black(arena, w, false);
                x = Some(p);
                parent = get_p(arena, p);
                left = parent.is_some_and(|pp| is_left_of(arena, pp, p));
                continue;
            }
            if is_black(arena, get_l(arena, w)) {
                set_black(arena, get_r(arena, w).expect("red nephew exists"), true);
                set_black(arena, w, false);
                rotate_left(arena, w, root);
                w = get_l(arena, p).expect("double-black slot has a sibling");
            }
            let p_black = arena[p as usize].is_black();
            set_black(arena, w, p_black);
            set_black(arena, p, true);
            set_black(arena, get_l(arena, w).expect("red nephew exists"), true);
            rotate_right(arena, p, root);
        }
        log::trace!("rb erase: deficit absorbed at {p}");
        x = root.node;
        break;
    }
    if let Some(x) = x {
        set_black(arena, x, true);
    }
    if let Some(r) = root.node {
        set_black(arena, r, true);
    }
}

/// Places `node` (duplicates allowed) and rebalances.
pub fn insert<N, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C)
where
    N: RbNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::insert::<N, RedBlack, C>(arena, root, node, compare_link);
}

/// Places `node` unless an equal key exists; see [`util::insert_unique`].
pub fn insert_unique<N, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C) -> bool
where
    N: RbNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::insert_unique::<N, RedBlack, C>(arena, root, node, compare_link)
}

/// Number of black nodes on every path from `root` down to a missing child.
pub fn black_height<N: RbNodeLike>(arena: &[N], root: &Root) -> usize {
    let mut h = 0;
    let mut curr = root.node;
    while let Some(i) = curr {
        if arena[i as usize].is_black() {
            h += 1;
        }
        curr = get_l(arena, i);
    }
    h
}

/// Validates links, order, root color, red edges and black height.
pub fn assert_red_black_tree<N, C>(arena: &[N], root: &Root, compare_link: C) -> ForestResult<()>
where
    N: RbNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::assert_tree(arena, root, compare_link)?;
    let Some(top) = root.node else {
        return Ok(());
    };
    if !arena[top as usize].is_black() {
        return Err(ForestError::Invariant("root is not black".to_string()));
    }

    let expected = black_height(arena, root);
    let mut err = None;
    util::visit_cond(arena, root, |i, node| {
        if !node.is_black() && !is_black(arena, get_p(arena, i)) {
            err = Some(format!("red node {i} has a red parent"));
            return false;
        }
        if get_l(arena, i).is_some() && get_r(arena, i).is_some() {
            return true;
        }
        // Every node with a missing child ends a path; count blacks upward.
        let mut h = 0;
        let mut curr = Some(i);
        while let Some(c) = curr {
            if arena[c as usize].is_black() {
                h += 1;
            }
            curr = get_p(arena, c);
        }
        if h != expected {
            err = Some(format!("black height {h} below {i}, expected {expected}"));
            return false;
        }
        true
    });
    match err {
        Some(msg) => Err(ForestError::Invariant(msg)),
        None => Ok(()),
    }
}
