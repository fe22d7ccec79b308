mod common;

use bst_forest::priority::PrioritySource;
use bst_forest::treap::{assert_treap, erase, insert, TreapNode};
use bst_forest::types::Root;
use bst_forest::util::{depth_max, find, size};

type N = TreapNode<i32, ()>;

fn treap_cmp(a: &N, b: &N) -> i32 {
    a.k.cmp(&b.k) as i32
}

fn key_cmp(n: &N, k: &i32) -> i32 {
    n.k.cmp(k) as i32
}

fn build(entries: &[(i32, u64)]) -> (Vec<N>, Root) {
    let mut arena: Vec<N> = entries
        .iter()
        .map(|&(k, prio)| TreapNode::new(k, (), prio))
        .collect();
    let mut root = Root::new();
    for i in 0..entries.len() as u32 {
        insert(&mut arena, &mut root, i, treap_cmp);
        if let Err(err) = assert_treap(&arena, &root, treap_cmp) {
            panic!("invalid treap after insert #{i}: {err}");
        }
    }
    (arena, root)
}

#[test]
fn treap_index_priorities_form_right_chain_matrix() {
    // Ascending keys with priority = insertion index: every new node already
    // has the largest priority, so it stays a leaf at the right end.
    let entries: Vec<(i32, u64)> = (0..32).map(|i| (i, i as u64)).collect();
    let (arena, root) = build(&entries);
    assert_eq!(root.node, Some(0));
    for i in 0..31u32 {
        assert_eq!(arena[i as usize].r, Some(i + 1));
        assert_eq!(arena[i as usize].l, None);
    }
    assert_eq!(depth_max(&arena, &root), 32);
}

#[test]
fn treap_descending_priorities_form_left_chain_matrix() {
    // Each new node has the smallest priority and rotates up to the root.
    let entries: Vec<(i32, u64)> = (0..32).map(|i| (i, 100 - i as u64)).collect();
    let (arena, root) = build(&entries);
    assert_eq!(root.node, Some(31));
    for i in 1..32u32 {
        assert_eq!(arena[i as usize].l, Some(i - 1));
        assert_eq!(arena[i as usize].r, None);
    }
    assert_eq!(depth_max(&arena, &root), 32);
}

#[test]
fn treap_priority_decides_root_matrix() {
    let (arena, root) = build(&[(50, 9), (20, 4), (80, 7), (10, 1), (30, 8), (70, 2)]);
    let top = root.node.unwrap();
    assert_eq!(arena[top as usize].k, 10);
    assert_eq!(
        common::inorder(&arena, &root, |n: &N| &n.k),
        vec![10, 20, 30, 50, 70, 80]
    );
}

#[test]
fn treap_erase_keeps_heap_matrix() {
    let mut source = PrioritySource::seed_from_u64(42);
    let entries: Vec<(i32, u64)> = common::scrambled(300, 8)
        .into_iter()
        .map(|k| (k, source.next_priority()))
        .collect();
    let (mut arena, mut root) = build(&entries);

    for k in common::scrambled(300, 9) {
        let idx = find(&arena, &root, &k, key_cmp).unwrap();
        erase(&mut arena, idx, &mut root);
        if let Err(err) = assert_treap(&arena, &root, treap_cmp) {
            panic!("invalid treap after delete({k}): {err}");
        }
        let erased = &arena[idx as usize];
        assert_eq!((erased.p, erased.l, erased.r), (None, None, None));
    }
    assert!(root.is_empty());
}

#[test]
fn treap_random_priorities_stay_shallow_matrix() {
    let mut source = PrioritySource::seed_from_u64(7);
    let entries: Vec<(i32, u64)> = (0..2048).map(|k| (k, source.next_priority())).collect();
    let (arena, root) = build(&entries);
    assert_eq!(size(&arena, &root), 2048);
    // Random priorities give a random search tree; its height is near 4.3 ln n.
    assert!(depth_max(&arena, &root) < 64);
}

#[test]
fn treap_equal_priorities_matrix() {
    let entries: Vec<(i32, u64)> = [5, 1, 9, 3, 7].iter().map(|&k| (k, 0)).collect();
    let (mut arena, mut root) = build(&entries);
    // Ties never rotate: the first node stays on top.
    assert_eq!(root.node, Some(0));
    erase(&mut arena, 0, &mut root);
    assert_treap(&arena, &root, treap_cmp).unwrap();
    assert_eq!(common::inorder(&arena, &root, |n: &N| &n.k), vec![1, 3, 7, 9]);
}
