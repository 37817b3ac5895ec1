use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rebuild_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Nothing ever rotates so the
/// result is as tall as it is long.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in (0..).take(num_nodes_in_full_tree(num_levels)) {
        tree.insert(x);
    }

    tree
}

/// Builds a full tree with `num_levels` levels by splitting on the median.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    Tree::from_sorted((0..).take(num_nodes_in_full_tree(num_levels)).collect::<Vec<_>>())
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Each iteration gets its own clone of the tree
/// so mutations don't leak between iterations.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // The unbalanced trees are linked lists, so stop before they get too deep to recurse.
    for num_levels in [3, 7, 11] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "scan", |tree, i| {
        let _node = black_box(tree.scan(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "rebalance", |tree, _| {
        tree.rebalance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
