#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use bst_forest::types::{Balance, Node, Root};
use bst_forest::util;

/// In-order keys of the tree under `root`.
pub fn inorder<N, K, F>(arena: &[N], root: &Root, key: F) -> Vec<K>
where
    N: Node,
    K: Clone,
    F: Fn(&N) -> &K,
{
    let mut out = Vec::new();
    util::visit(arena, root, |_, node| out.push(key(node).clone()));
    out
}

/// Pushes one node per key and inserts it with `B`, in order.
pub fn build<N, B, M, C>(keys: &[i32], make: M, compare_link: C) -> (Vec<N>, Root)
where
    N: Node,
    B: Balance<N>,
    M: Fn(usize, i32) -> N,
    C: Fn(&N, &N) -> i32 + Copy,
{
    let mut arena = Vec::with_capacity(keys.len());
    let mut root = Root::new();
    for (i, &k) in keys.iter().enumerate() {
        arena.push(make(i, k));
        util::insert::<N, B, C>(&mut arena, &mut root, i as u32, compare_link);
    }
    (arena, root)
}

/// `0..n` in a reproducible shuffled order.
pub fn scrambled(n: i32, seed: u64) -> Vec<i32> {
    let mut xs: Vec<i32> = (0..n).collect();
    xs.shuffle(&mut Xoshiro256StarStar::seed_from_u64(seed));
    xs
}
