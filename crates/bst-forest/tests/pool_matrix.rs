use bst_forest::pool::{alloc, free};
use bst_forest::red_black::{insert, RbNode};
use bst_forest::types::Root;
use bst_forest::util::size;

fn rb_cmp(a: &RbNode<i32, ()>, b: &RbNode<i32, ()>) -> i32 {
    a.k.cmp(&b.k) as i32
}

#[test]
fn pool_alloc_returns_empty_roots_matrix() {
    let roots = alloc(5).unwrap();
    assert_eq!(roots.len(), 5);
    assert!(roots.iter().all(Root::is_empty));
    free::<RbNode<i32, ()>, _>(&mut [], roots, |_, _| {});

    assert_eq!(alloc(0).map(|r| r.len()), Some(0));
}

#[test]
fn pool_alloc_failure_matrix() {
    assert!(alloc(usize::MAX).is_none());
}

#[test]
fn pool_free_destroys_every_tree_matrix() {
    let mut arena: Vec<RbNode<i32, ()>> = (0..30).map(|k| RbNode::new(k, ())).collect();
    let mut roots = alloc(3).unwrap();
    for i in 0..30u32 {
        insert(&mut arena, &mut roots[(i % 3) as usize], i, rb_cmp);
    }
    for root in &roots {
        assert_eq!(size(&arena, root), 10);
    }

    let mut seen = vec![0; arena.len()];
    free(&mut arena, roots, |i, n| {
        assert_eq!((n.p, n.l, n.r), (None, None, None));
        seen[i as usize] += 1;
    });
    assert!(seen.iter().all(|&c| c == 1));
}
