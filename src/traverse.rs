//! Lazy traversals over the nodes of a tree.
//!
//! Every iterator here keeps its own explicit stack or queue instead of recursing, so
//! walking a tree that has grown tall through skewed inserts never risks the call stack.
//! They borrow the tree, yield each node exactly once, and are exhausted afterwards.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! let pre: Vec<i32> = tree.pre_order().map(|n| *n.value()).collect();
//! let post: Vec<i32> = tree.post_order().map(|n| *n.value()).collect();
//! let level: Vec<i32> = tree.level_order().map(|n| *n.value()).collect();
//!
//! assert_eq!(pre, [4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(post, [1, 3, 2, 5, 7, 6, 4]);
//! assert_eq!(level, [4, 2, 6, 1, 3, 5, 7]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields values sorted ascending.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Breadth first: the root, then its children left to right, then theirs.
    LevelOrder,
}

/// Calls `visit` for every node reachable from `start` in the given order.
pub(crate) fn walk<'a, T, F>(start: Option<&'a Node<T>>, order: Order, visit: F)
where
    T: 'a,
    F: FnMut(&'a Node<T>),
{
    match order {
        Order::PreOrder => PreOrder::new(start).for_each(visit),
        Order::InOrder => InOrder::new(start).for_each(visit),
        Order::PostOrder => PostOrder::new(start).for_each(visit),
        Order::LevelOrder => LevelOrder::new(start).for_each(visit),
    }
}

/// Parent-first depth first traversal. See [`Order::PreOrder`].
#[derive(Clone, Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Sorted depth first traversal. See [`Order::InOrder`].
#[derive(Clone, Debug)]
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being visited.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_edge(start);
        iter
    }

    fn push_left_edge(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// The values of an [`InOrder`] traversal, i.e. every value in ascending order.
#[derive(Clone, Debug)]
pub struct Values<'a, T> {
    nodes: InOrder<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            nodes: InOrder::new(start),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::value)
    }
}

impl<T> FusedIterator for Values<'_, T> {}

/// Children-first depth first traversal. See [`Order::PostOrder`].
#[derive(Clone, Debug)]
pub struct PostOrder<'a, T> {
    /// Each node is paired with whether its children have already been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: start.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Breadth first traversal. See [`Order::LevelOrder`].
#[derive(Clone, Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        // An empty tree seeds nothing, so the first `next` simply returns `None`.
        Self {
            queue: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// Owned in-order traversal that hands back every value while dismantling the tree.
#[derive(Debug)]
pub struct IntoValues<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoValues<T> {
    pub(crate) fn new(start: Option<Box<Node<T>>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_edge(start);
        iter
    }

    fn push_left_edge(&mut self, mut node: Option<Box<Node<T>>>) {
        while let Some(mut n) = node {
            node = n.left.take();
            self.stack.push(n);
        }
    }
}

impl<T> Iterator for IntoValues<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { value, right, .. } = *node;
        self.push_left_edge(right);
        Some(value)
    }
}

impl<T> FusedIterator for IntoValues<T> {}
