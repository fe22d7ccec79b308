use crate::error::{ForestError, ForestResult};
use crate::link::{get_l, get_p, get_r, link_node, next};
use crate::types::{Balance, Node, Root, Side};

use super::link_and_rebalance;

/// Pushes a detached copy of `node` onto `dst`.
fn push_clone<S, N, F>(dst: &mut Vec<N>, node: &S, clone: &mut F) -> Option<u32>
where
    N: Node,
    F: FnMut(&S) -> Option<N>,
{
    let mut copy = clone(node)?;
    copy.set_p(None);
    copy.set_l(None);
    copy.set_r(None);
    dst.push(copy);
    Some((dst.len() - 1) as u32)
}

/// Destroys and drops every node pushed past `base`.
fn roll_back<N, D>(dst: &mut Vec<N>, base: usize, mut destroy: D) -> ForestError
where
    N: Node,
    D: FnMut(u32, &mut N),
{
    let cloned = dst.len() - base;
    log::debug!("clone aborted after {cloned} node(s); rolling back");
    for idx in base..dst.len() {
        let node = &mut dst[idx];
        node.set_p(None);
        node.set_l(None);
        node.set_r(None);
        destroy(idx as u32, node);
    }
    dst.truncate(base);
    ForestError::CloneAborted { cloned }
}

/// Deep-copies the tree under `root` into `dst`, keeping its exact shape.
///
/// `clone` produces the payload of each copy and should carry the balance
/// metadata over verbatim; the same shape with the same metadata satisfies
/// the same invariant. Links are rewritten here. Returns the root of the copy.
///
/// If `clone` returns `None`, every copy made so far is unlinked, handed to
/// `destroy` and removed from `dst`.
pub fn clone_into<N, F, D>(
    src: &[N],
    root: &Root,
    dst: &mut Vec<N>,
    mut clone: F,
    destroy: D,
) -> ForestResult<Root>
where
    N: Node,
    F: FnMut(&N) -> Option<N>,
    D: FnMut(u32, &mut N),
{
    let Some(top) = root.node else {
        return Ok(Root::new());
    };
    let base = dst.len();
    let Some(copy_top) = push_clone(dst, &src[top as usize], &mut clone) else {
        return Err(roll_back(dst, base, destroy));
    };
    let mut out = Root::from(Some(copy_top));

    // Pre-order walk over parent edges: `from` is the child we just climbed
    // out of, `None` when we arrived from above.
    let mut s = top;
    let mut d = copy_top;
    let mut from: Option<u32> = None;
    loop {
        let sl = get_l(src, s);
        let sr = get_r(src, s);
        let step = match from {
            None => sl
                .map(|c| (c, Side::Left))
                .or_else(|| sr.map(|c| (c, Side::Right))),
            Some(c) if Some(c) == sl => sr.map(|c| (c, Side::Right)),
            Some(_) => None,
        };

        if let Some((child, side)) = step {
            let Some(copy) = push_clone(dst, &src[child as usize], &mut clone) else {
                return Err(roll_back(dst, base, destroy));
            };
            link_node(dst, copy, Some(d), side, &mut out);
            s = child;
            d = copy;
            from = None;
            continue;
        }

        if s == top {
            break;
        }
        from = Some(s);
        s = get_p(src, s).expect("non-top node has a parent");
        d = get_p(dst, d).expect("copy mirrors source shape");
    }
    Ok(out)
}

/// Copies the in-order range `[begin, end)` of `src` into a new tree in
/// `dst`, balanced by `B`.
///
/// Copies are appended one by one at the right end of the new tree and
/// rebalanced as they go, so `B::init` resets their metadata first (treap
/// priorities are the caller's and survive). The source range must be in
/// order; `end == None` runs to the last node. Source and destination node
/// types may differ.
pub fn clone_range_into<S, N, B, F, D>(
    src: &[S],
    begin: Option<u32>,
    end: Option<u32>,
    dst: &mut Vec<N>,
    mut clone: F,
    destroy: D,
) -> ForestResult<Root>
where
    S: Node,
    N: Node,
    B: Balance<N>,
    F: FnMut(&S) -> Option<N>,
    D: FnMut(u32, &mut N),
{
    let base = dst.len();
    let mut out = Root::new();
    let mut tail: Option<u32> = None;
    let mut curr = begin;
    while curr != end {
        let Some(s) = curr else { break };
        let Some(copy) = push_clone(dst, &src[s as usize], &mut clone) else {
            return Err(roll_back(dst, base, destroy));
        };
        link_and_rebalance::<N, B>(dst, &mut out, copy, tail, Side::Right);
        tail = Some(copy);
        curr = next(src, s);
    }
    Ok(out)
}
