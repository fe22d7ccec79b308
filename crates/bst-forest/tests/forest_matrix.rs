use bst_forest::error::ForestError;
use bst_forest::forest::{RbForest, SplayForest, TreapForest, WavlForest};
use bst_forest::red_black::{assert_red_black_tree, RbNode};
use bst_forest::splay::SplayNode;
use bst_forest::treap::{assert_treap, TreapNode};
use bst_forest::wavl::{assert_wavl_tree, WavlNode};
use bst_forest::PrioritySource;

fn rb_cmp(a: &RbNode<i32, String>, b: &RbNode<i32, String>) -> i32 {
    a.k.cmp(&b.k) as i32
}

fn rb_key(n: &RbNode<i32, String>, k: &i32) -> i32 {
    n.k.cmp(k) as i32
}

fn sample() -> RbForest<i32, String> {
    let mut forest = RbForest::new();
    for k in [40, 10, 70, 20, 60, 30, 50] {
        forest.insert(RbNode::new(k, format!("v{k}")), rb_cmp);
    }
    forest
}

#[test]
fn forest_map_operations_matrix() {
    let mut forest = sample();
    assert_eq!(forest.len(), 7);
    assert!(!forest.is_empty());
    assert_red_black_tree(forest.arena(), forest.root(), rb_cmp).unwrap();

    let idx = forest.find(&30, rb_key).unwrap();
    assert_eq!(forest.node(idx).v, "v30");
    forest.node_mut(idx).v.push('!');
    assert_eq!(forest.node(idx).v, "v30!");

    let keys: Vec<i32> = forest.iter().map(|(_, n)| n.k).collect();
    assert_eq!(keys, vec![10, 20, 30, 40, 50, 60, 70]);

    let lb = forest.lower_bound(&35, rb_key).unwrap();
    assert_eq!(forest.node(lb).k, 40);
    let ub = forest.upper_bound(&40, rb_key).unwrap();
    assert_eq!(forest.node(ub).k, 50);
    assert_eq!(forest.prev(lb).map(|i| forest.node(i).k), Some(30));
    assert_eq!(forest.next(ub).map(|i| forest.node(i).k), Some(60));
    assert_eq!(forest.first().map(|i| forest.node(i).k), Some(10));
    assert_eq!(forest.last().map(|i| forest.node(i).k), Some(70));

    let removed = forest.remove(idx);
    assert_eq!(removed.k, 30);
    assert_eq!(removed.v, "v30!");
    assert!(!forest.contains(idx));
    assert_eq!(forest.len(), 6);
    assert_eq!(forest.find(&30, rb_key), None);
    assert_red_black_tree(forest.arena(), forest.root(), rb_cmp).unwrap();
}

#[test]
fn forest_unique_and_duplicates_matrix() {
    let mut forest = sample();
    let back = forest
        .insert_unique(RbNode::new(20, "again".to_string()), rb_cmp)
        .unwrap_err();
    assert_eq!(back.v, "again");
    assert_eq!(forest.len(), 7);

    let idx = forest
        .insert_unique(RbNode::new(25, "new".to_string()), rb_cmp)
        .unwrap();
    assert!(forest.contains(idx));

    forest.insert(RbNode::new(20, "dup".to_string()), rb_cmp);
    forest.insert(RbNode::new(20, "dup2".to_string()), rb_cmp);
    assert_eq!(forest.count(&20, rb_key), 3);

    let mut dropped = Vec::new();
    let erased = forest.erase_equal(&20, rb_key, |_, n| dropped.push(std::mem::take(&mut n.v)));
    assert_eq!(erased, 3);
    assert_eq!(dropped, vec!["v20", "dup", "dup2"]);
    assert_eq!(forest.len(), 7);
    assert_red_black_tree(forest.arena(), forest.root(), rb_cmp).unwrap();

    // Freed slots are reused before the arena grows.
    let arena_len = forest.arena().len();
    for k in [1, 2, 3] {
        forest.insert(RbNode::new(k, String::new()), rb_cmp);
    }
    assert_eq!(forest.arena().len(), arena_len);
    forest.insert(RbNode::new(4, String::new()), rb_cmp);
    assert_eq!(forest.arena().len(), arena_len + 1);
}

#[test]
fn forest_clear_and_swap_matrix() {
    let mut a = sample();
    let mut b = RbForest::new();
    b.insert(RbNode::new(1, "one".to_string()), rb_cmp);

    a.swap(&mut b);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 7);

    let mut destroyed = 0;
    b.clear(|_, _| destroyed += 1);
    assert_eq!(destroyed, 7);
    assert!(b.is_empty());
    assert_eq!(b.len(), 0);
    assert!(b.arena().is_empty());
}

#[test]
fn forest_clone_matrix() {
    let forest = sample();
    let copy = forest.try_clone_with(|n| Some(n.clone()), |_, _| {}).unwrap();
    assert_eq!(copy.len(), forest.len());
    assert_red_black_tree(copy.arena(), copy.root(), rb_cmp).unwrap();
    let a: Vec<_> = forest.iter().map(|(_, n)| n.v.clone()).collect();
    let b: Vec<_> = copy.iter().map(|(_, n)| n.v.clone()).collect();
    assert_eq!(a, b);

    let mut left = 3;
    let err = forest
        .try_clone_with(
            |n| {
                if left == 0 {
                    return None;
                }
                left -= 1;
                Some(n.clone())
            },
            |_, _| {},
        )
        .unwrap_err();
    assert_eq!(err, ForestError::CloneAborted { cloned: 3 });

    let begin = forest.lower_bound(&20, rb_key);
    let end = forest.lower_bound(&60, rb_key);
    let part = forest
        .try_clone_range_with(begin, end, |n| Some(n.clone()), |_, _| {})
        .unwrap();
    let keys: Vec<i32> = part.iter().map(|(_, n)| n.k).collect();
    assert_eq!(keys, vec![20, 30, 40, 50]);
    assert_eq!(part.len(), 4);
    assert_red_black_tree(part.arena(), part.root(), rb_cmp).unwrap();
}

#[test]
fn forest_capacity_matrix() {
    let forest = RbForest::<i32, String>::try_with_capacity(64).unwrap();
    assert!(forest.is_empty());
    assert!(forest.arena().is_empty());

    let err = RbForest::<i32, String>::try_with_capacity(usize::MAX).unwrap_err();
    assert_eq!(err, ForestError::AllocationFailed { requested: usize::MAX });
}

#[test]
fn forest_splay_access_matrix() {
    let cmp = |a: &SplayNode<i32, ()>, b: &SplayNode<i32, ()>| a.k.cmp(&b.k) as i32;
    let key = |n: &SplayNode<i32, ()>, k: &i32| n.k.cmp(k) as i32;
    let mut forest = SplayForest::new();
    for k in 0..16 {
        forest.insert(SplayNode::new(k, ()), cmp);
    }
    let idx = forest.find(&3, key).unwrap();
    assert_ne!(forest.root().node, Some(idx));
    assert_eq!(forest.access(&3, key), Some(idx));
    assert_eq!(forest.root().node, Some(idx));
    assert_eq!(forest.access(&99, key), None);
}

#[test]
fn forest_wavl_and_treap_matrix() {
    let wcmp = |a: &WavlNode<i32, ()>, b: &WavlNode<i32, ()>| a.k.cmp(&b.k) as i32;
    let mut wavl = WavlForest::new();
    let mut idxs = Vec::new();
    for k in 0..64 {
        idxs.push(wavl.insert(WavlNode::new(k, ()), wcmp));
    }
    for idx in idxs.into_iter().step_by(2) {
        wavl.erase(idx, |_, _| {});
        assert_wavl_tree(wavl.arena(), wavl.root(), wcmp).unwrap();
    }
    assert_eq!(wavl.len(), 32);

    let tcmp = |a: &TreapNode<i32, ()>, b: &TreapNode<i32, ()>| a.k.cmp(&b.k) as i32;
    let mut source = PrioritySource::seed_from_u64(99);
    let mut treap = TreapForest::new();
    for k in (0..64).rev() {
        treap.insert(TreapNode::new(k, (), source.next_priority()), tcmp);
    }
    assert_treap(treap.arena(), treap.root(), tcmp).unwrap();
    while let Some(first) = treap.first() {
        treap.erase(first, |_, _| {});
        assert_treap(treap.arena(), treap.root(), tcmp).unwrap();
    }
    assert!(treap.is_empty());
}
