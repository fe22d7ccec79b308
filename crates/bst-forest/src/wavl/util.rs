use crate::error::{ForestError, ForestResult};
use crate::link::{get_l, get_p, get_r, is_left_of, rotate_left, rotate_right, splice};
use crate::types::{Balance, Root};
use crate::util;

use super::types::WavlNodeLike;

/// Rank-balanced discipline.
#[derive(Clone, Copy, Debug, Default)]
pub struct RankBalanced;

impl<N: WavlNodeLike> Balance<N> for RankBalanced {
    fn init(node: &mut N) {
        node.set_rank(0);
    }

    fn insert_rebalance(arena: &mut [N], node: u32, root: &mut Root) {
        insert_rebalance(arena, node, root);
    }

    fn erase(arena: &mut [N], node: u32, root: &mut Root) {
        erase(arena, node, root);
    }
}

/// Rank of `i`, with -1 for a missing node.
#[inline]
pub fn rank_of<N: WavlNodeLike>(arena: &[N], i: Option<u32>) -> i32 {
    i.map_or(-1, |i| arena[i as usize].rank() as i32)
}

#[inline]
fn rank<N: WavlNodeLike>(arena: &[N], i: u32) -> i32 {
    arena[i as usize].rank() as i32
}

#[inline]
fn promote<N: WavlNodeLike>(arena: &mut [N], i: u32) {
    let node = &mut arena[i as usize];
    node.set_rank(node.rank() + 1);
}

#[inline]
fn demote<N: WavlNodeLike>(arena: &mut [N], i: u32) {
    let node = &mut arena[i as usize];
    debug_assert!(node.rank() > 0, "demoting rank-0 node {i}");
    node.set_rank(node.rank() - 1);
}

#[inline]
fn is_leaf<N: WavlNodeLike>(arena: &[N], i: u32) -> bool {
    get_l(arena, i).is_none() && get_r(arena, i).is_none()
}

/// Repairs ranks after `node` was linked as a rank-0 leaf.
pub fn insert_rebalance<N: WavlNodeLike>(arena: &mut [N], node: u32, root: &mut Root) {
    arena[node as usize].set_rank(0);
    let mut x = node;
    while let Some(p) = get_p(arena, x) {
        if rank(arena, p) != rank(arena, x) {
            break;
        }
        let x_left = is_left_of(arena, p, x);
        let sibling = if x_left { get_r(arena, p) } else { get_l(arena, p) };
        if rank(arena, p) - rank_of(arena, sibling) == 1 {
            promote(arena, p);
            x = p;
            continue;
        }

        let inner = if x_left { get_r(arena, x) } else { get_l(arena, x) };
        if rank(arena, x) - rank_of(arena, inner) == 2 {
            log::trace!("wavl insert: single rotation at {p}");
            if x_left {
                rotate_right(arena, p, root);
            } else {
                rotate_left(arena, p, root);
            }
            demote(arena, p);
        } else {
            log::trace!("wavl insert: double rotation at {p}");
            let y = inner.expect("inner 1-child exists");
            if x_left {
                rotate_left(arena, x, root);
                rotate_right(arena, p, root);
            } else {
                rotate_right(arena, x, root);
                rotate_left(arena, p, root);
            }
            promote(arena, y);
            demote(arena, x);
            demote(arena, p);
        }
        break;
    }
}

/// Sets the rank of `i` one above its higher child.
#[inline]
fn update_rank<N: WavlNodeLike>(arena: &mut [N], i: u32) {
    let r = rank_of(arena, get_l(arena, i)).max(rank_of(arena, get_r(arena, i))) + 1;
    arena[i as usize].set_rank(r as u8);
}

/// Restores the rank rule at `p` once one of its subtrees lost a level.
/// Returns the node now at the top of `p`'s old position.
fn erase_rebalance_at<N: WavlNodeLike>(arena: &mut [N], p: u32, root: &mut Root) -> u32 {
    let (l, r) = (get_l(arena, p), get_r(arena, p));
    let (rl, rr) = (rank_of(arena, l), rank_of(arena, r));
    if (rl - rr).abs() <= 1 {
        update_rank(arena, p);
        return p;
    }

    // The taller side is two ranks above the other one.
    let left_heavy = rl > rr;
    let s = if left_heavy { l } else { r };
    let s = s.expect("taller child exists");
    let (outer, inner) = if left_heavy {
        (get_l(arena, s), get_r(arena, s))
    } else {
        (get_r(arena, s), get_l(arena, s))
    };
    if rank_of(arena, outer) >= rank_of(arena, inner) {
        log::trace!("wavl erase: single rotation at {p}");
        if left_heavy {
            rotate_right(arena, p, root);
        } else {
            rotate_left(arena, p, root);
        }
        update_rank(arena, p);
        update_rank(arena, s);
        s
    } else {
        log::trace!("wavl erase: double rotation at {p}");
        let y = inner.expect("taller inner grandchild exists");
        if left_heavy {
            rotate_left(arena, s, root);
            rotate_right(arena, p, root);
        } else {
            rotate_right(arena, s, root);
            rotate_left(arena, p, root);
        }
        update_rank(arena, p);
        update_rank(arena, s);
        update_rank(arena, y);
        y
    }
}

/// Unlinks `node` and repairs ranks.
///
/// With two children the successor inherits `node`'s rank, so repair starts
/// where the successor used to hang. The walk goes up while subtree ranks
/// keep shrinking, rotating wherever a node would be left 2,2 or 3,1, and
/// stops at the first subtree whose rank is unchanged.
pub fn erase<N: WavlNodeLike>(arena: &mut [N], node: u32, root: &mut Root) {
    let vacancy = splice(arena, node, root, |arena, node, scor| {
        let node_rank = arena[node as usize].rank();
        let scor_rank = arena[scor as usize].rank();
        arena[node as usize].set_rank(scor_rank);
        arena[scor as usize].set_rank(node_rank);
    });

    let mut curr = vacancy.parent;
    while let Some(p) = curr {
        let before = rank(arena, p);
        let top = erase_rebalance_at(arena, p, root);
        if rank(arena, top) == before {
            break;
        }
        curr = get_p(arena, top);
    }
}

/// Places `node` (duplicates allowed) and rebalances.
pub fn insert<N, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C)
where
    N: WavlNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::insert::<N, RankBalanced, C>(arena, root, node, compare_link);
}

/// Places `node` unless an equal key exists.
pub fn insert_unique<N, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C) -> bool
where
    N: WavlNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::insert_unique::<N, RankBalanced, C>(arena, root, node, compare_link)
}

/// Validates links, order and the rank rule: every rank difference is 1 or
/// 2, no node with children is 2,2 and leaves have rank 0.
pub fn assert_wavl_tree<N, C>(arena: &[N], root: &Root, compare_link: C) -> ForestResult<()>
where
    N: WavlNodeLike,
    C: Fn(&N, &N) -> i32,
{
    util::assert_tree(arena, root, compare_link)?;
    let mut err = None;
    util::visit_cond(arena, root, |i, node| {
        let r = node.rank() as i32;
        let dl = r - rank_of(arena, get_l(arena, i));
        let dr = r - rank_of(arena, get_r(arena, i));
        if !(1..=2).contains(&dl) || !(1..=2).contains(&dr) {
            err = Some(format!("node {i} of rank {r} has rank differences {dl},{dr}"));
            return false;
        }
        if dl == 2 && dr == 2 && !is_leaf(arena, i) {
            err = Some(format!("node {i} of rank {r} is 2,2"));
            return false;
        }
        if is_leaf(arena, i) && r != 0 {
            err = Some(format!("leaf {i} has rank {r}"));
            return false;
        }
        true
    });
    match err {
        Some(msg) => Err(ForestError::Invariant(msg)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavl::WavlNode;

    fn cmp(a: &WavlNode<i32, ()>, b: &WavlNode<i32, ()>) -> i32 {
        a.k.cmp(&b.k) as i32
    }

    #[test]
    fn three_ascending_inserts_form_a_rank_one_root() {
        let mut arena: Vec<_> = (0..3).map(|k| WavlNode::new(k, ())).collect();
        let mut root = Root::new();
        for i in 0..3 {
            insert(&mut arena, &mut root, i, cmp);
        }
        assert_eq!(root.node, Some(1));
        assert_eq!(arena[1].rank, 1);
        assert_eq!(arena[0].rank, 0);
        assert_eq!(arena[2].rank, 0);
        assert_wavl_tree(&arena, &root, cmp).unwrap();
    }

    #[test]
    fn erasing_a_leaf_demotes_the_parent() {
        let mut arena: Vec<_> = (0..2).map(|k| WavlNode::new(k, ())).collect();
        let mut root = Root::new();
        insert(&mut arena, &mut root, 0, cmp);
        insert(&mut arena, &mut root, 1, cmp);
        assert_eq!(arena[0].rank, 1);
        erase(&mut arena, 1, &mut root);
        assert_eq!(root.node, Some(0));
        assert_eq!(arena[0].rank, 0);
        assert_wavl_tree(&arena, &root, cmp).unwrap();
    }

    #[test]
    fn validator_rejects_two_two_node() {
        let mut arena: Vec<_> = (0..3).map(|k| WavlNode::new(k, ())).collect();
        let mut root = Root::new();
        for i in 0..3 {
            insert(&mut arena, &mut root, i, cmp);
        }
        arena[1].rank = 2;
        assert!(matches!(
            assert_wavl_tree(&arena, &root, cmp),
            Err(ForestError::Invariant(_))
        ));
    }

    #[test]
    fn erase_rotates_instead_of_leaving_two_two() {
        //       3
        //      / \
        //     1   5
        //    /   / \
        //   0   4   6
        //            \
        //             7
        let mut arena: Vec<_> = (0..8).map(|k| WavlNode::new(k, ())).collect();
        let mut root = Root::new();
        for i in [3, 1, 5, 0, 4, 6, 7] {
            insert(&mut arena, &mut root, i, cmp);
        }
        assert_wavl_tree(&arena, &root, cmp).unwrap();
        // Dropping 0 shrinks the left side to rank 0 against rank 2: rotate at 3.
        erase(&mut arena, 0, &mut root);
        assert_eq!(root.node, Some(5));
        assert_eq!(arena[5].rank, 2);
        assert_eq!(arena[3].l, Some(1));
        assert_eq!(arena[3].r, Some(4));
        assert_wavl_tree(&arena, &root, cmp).unwrap();
    }
}
