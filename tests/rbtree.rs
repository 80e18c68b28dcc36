use klowest::rbtree::{NodeId, RBTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn keys(tree: &RBTree<u32>) -> Vec<u32> {
    tree.iter().copied().collect()
}

fn height_bound(len: usize) -> f64 {
    2.0 * ((len + 1) as f64).log2()
}

#[test]
fn rbtree_random_test() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut tree = RBTree::new();
    let mut expected: Vec<u32> = Vec::new();

    for _ in 0..5000 {
        // Insert twice as often as delete to grow the tree.
        if expected.is_empty() || rng.gen_range(0..3) != 0 {
            let key = rng.gen_range(0..256);
            let x = tree.insert(key);
            assert_eq!(tree[x], key);
            let i = expected.partition_point(|k| *k <= key);
            expected.insert(i, key);
        } else {
            // Walk to a random rank and delete that node.
            let rank = rng.gen_range(0..expected.len());
            let mut x = tree.minimum();
            for _ in 0..rank {
                x = tree.successor(x);
            }
            assert_eq!(tree.delete(x), expected.remove(rank));
        }
        assert_eq!(tree.len(), expected.len());
        assert!(tree.height() as f64 <= height_bound(tree.len()));
    }
    assert_eq!(keys(&tree), expected);
}

#[test]
fn rbtree_neighbors_test() {
    let mut tree = RBTree::new();
    for key in [50, 20, 80, 10, 30, 70, 90] {
        tree.insert(key);
    }

    let mut forward = Vec::new();
    let mut x = tree.minimum();
    while !x.is_nil() {
        forward.push(tree[x]);
        x = tree.successor(x);
    }
    assert_eq!(forward, vec![10, 20, 30, 50, 70, 80, 90]);

    let mut backward = Vec::new();
    let mut x = tree.maximum();
    while !x.is_nil() {
        backward.push(tree[x]);
        x = tree.predecessor(x);
    }
    forward.reverse();
    assert_eq!(backward, forward);
}

#[test]
fn rbtree_drain_test() {
    let mut tree = RBTree::new();
    for key in 0..1000u32 {
        tree.insert(key);
    }
    for key in 0..1000u32 {
        assert_eq!(tree.delete(tree.minimum()), key);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.minimum(), NodeId::NIL);
    assert_eq!(tree.maximum(), NodeId::NIL);
    assert_eq!(tree.height(), 0);
}
