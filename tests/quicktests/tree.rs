use rebuild_bst::{Insert, Node, Order, Tree};

use std::collections::BTreeSet;

use crate::init_logging;

fn values(tree: &Tree<i8>) -> Vec<i8> {
    tree.iter().copied().collect()
}

fn sorted_unique(xs: Vec<i8>) -> Vec<i8> {
    xs.into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn skewed(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Checks every value under every node against that node directly rather than through
/// bounds passed down from the root.
fn holds_order_invariant(tree: &Tree<i8>) -> bool {
    tree.pre_order().all(|node: &Node<i8>| {
        node.left()
            .map_or(true, |l| l.pre_order().all(|n| n.value() < node.value()))
            && node
                .right()
                .map_or(true, |r| r.pre_order().all(|n| n.value() > node.value()))
    })
}

#[test]
fn traversal_orders() {
    init_logging();
    let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);

    let collect = |order| {
        let mut seen = Vec::new();
        tree.traverse(order, |n| seen.push(*n.value()));
        seen
    };

    assert_eq!(collect(Order::PreOrder), [4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(collect(Order::InOrder), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(collect(Order::PostOrder), [1, 3, 2, 5, 7, 6, 4]);
    assert_eq!(collect(Order::LevelOrder), [4, 2, 6, 1, 3, 5, 7]);
}

#[test]
fn height_of_small_trees() {
    init_logging();
    let empty: Tree<i8> = Tree::new();
    assert_eq!(empty.height(), 0);
    assert!(empty.is_balanced());

    let single = Tree::from_sorted(vec![1]);
    assert_eq!(single.height(), 1);
}

#[test]
fn skewed_inserts_unbalance_until_rebalance() {
    init_logging();
    let mut tree = Tree::from_sorted(vec![1, 2, 3, 4, 5]);
    assert!(tree.is_balanced());

    for x in 6..=9 {
        assert_eq!(tree.insert(x), Insert::Inserted);
    }
    assert!(!tree.is_balanced());

    tree.rebalance();
    assert!(tree.is_balanced());
    assert_eq!(values(&tree), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn delete_root_with_two_children() {
    init_logging();
    let mut tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(tree.delete(&4), Some(4));
    assert_eq!(values(&tree), [1, 2, 3, 5, 6, 7]);
    assert!(holds_order_invariant(&tree));
}

#[test]
fn build_shape_is_fixed() {
    init_logging();
    let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5]);
    let pre: Vec<i8> = tree.pre_order().map(|n| *n.value()).collect();

    // 3 splits [1, 2] and [4, 5], each of which is rooted at its lower value.
    assert_eq!(pre, [3, 1, 2, 4, 5]);
}

#[quickcheck]
fn build_roots_every_subtree_at_lower_median(xs: Vec<i8>) -> bool {
    let xs = sorted_unique(xs);
    let tree = Tree::from_sorted(xs.clone());

    let median = xs.get(xs.len().saturating_sub(1) / 2).copied();

    tree.root().map(|n| *n.value()) == median
        && tree.pre_order().all(|node| {
            let below: Vec<i8> = node.in_order().map(|n| *n.value()).collect();
            below[(below.len() - 1) / 2] == *node.value()
        })
}

#[quickcheck]
fn built_trees_are_balanced(xs: Vec<i8>) -> bool {
    let xs = sorted_unique(xs);
    let tree = Tree::from_sorted(xs.clone());

    tree.is_balanced() && holds_order_invariant(&tree) && values(&tree) == xs
}

#[quickcheck]
fn inserts_keep_order_invariant(xs: Vec<i8>) -> bool {
    let tree = skewed(&xs);

    holds_order_invariant(&tree) && tree.len() == sorted_unique(xs).len()
}

#[quickcheck]
fn rebalance_round_trip(xs: Vec<i8>) -> bool {
    let mut tree = skewed(&xs);
    let before = values(&tree);

    tree.rebalance();
    let after = values(&tree);

    before == after && after.windows(2).all(|w| w[0] < w[1]) && tree.is_balanced()
}

#[quickcheck]
fn duplicate_insert_is_noop(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = skewed(&xs);
    tree.insert(x);
    let before = values(&tree);
    let len = tree.len();

    tree.insert(x) == Insert::AlreadyExists && values(&tree) == before && tree.len() == len
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = skewed(&xs);

    deletes.iter().all(|x| {
        let present = tree.contains(x);
        let len = tree.len();
        let removed = tree.delete(x);

        removed == present.then_some(*x)
            && len - tree.len() == usize::from(present)
            && !tree.contains(x)
            && holds_order_invariant(&tree)
    })
}

#[quickcheck]
fn level_order_visits_every_node(xs: Vec<i8>) -> bool {
    let tree = skewed(&xs);
    let mut level: Vec<i8> = tree.level_order().map(|n| *n.value()).collect();
    level.sort_unstable();

    level == values(&tree)
}

#[quickcheck]
fn depth_is_at_most_height(xs: Vec<i8>) -> bool {
    let tree = skewed(&xs);

    xs.iter()
        .all(|x| tree.depth(x).map_or(false, |d| d < tree.height()))
}
