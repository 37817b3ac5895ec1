//! This crate exposes a plain, owned Binary Search Tree (BST) over totally ordered values,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)`. This tree does not rotate on
//! insert or delete, so repeated skewed inserts can make it as tall as it is long.
//! Instead, balance is checked on demand with [`Tree::is_balanced`] and restored with
//! [`Tree::rebalance`], which flattens the tree into its sorted values and rebuilds it
//! by repeatedly splitting on the median.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::{Insert, Tree};
//!
//! let mut tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//!
//! assert_eq!(tree.insert(8), Insert::Inserted);
//! assert_eq!(tree.insert(8), Insert::AlreadyExists);
//!
//! assert_eq!(tree.delete(&4), Some(4));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
mod outcome;
mod render;
pub mod traverse;
mod tree;


pub use node::Node;
pub use outcome::Insert;
pub use render::Pretty;
pub use traverse::Order;
pub use tree::Tree;
