//! An owned BST that only rebalances when asked to. Inserts and deletes never rotate, so
//! the shape of the tree reflects the order of operations until [`Tree::rebalance`]
//! flattens it and rebuilds it from the median outwards.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Ascending inserts build a "linked list".
//! for x in 1..=7 {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.height(), 7);
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding keeps the values but fixes the shape.
//! tree.rebalance();
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::node::{self, Link, Node};
use crate::outcome::Insert;
use crate::render::Pretty;
use crate::traverse::{self, IntoValues, Order};

/// A Binary Search Tree of unique values. Each value doubles as its own key.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    /// How many nodes are reachable from `root`.
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// The top node of the tree, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| root.min().value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| root.max().value())
    }

    /// How many levels the tree has. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Whether every node's subtrees differ in height by at most one. An empty tree is
    /// balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Searches every node breadth first for one holding `value`, without relying on the
    /// ordering of the tree. On a valid tree this finds the same node as [`Tree::find`]
    /// but visits up to every node to do so.
    pub fn scan(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.level_order().find(|node| node.value == *value)
    }

    /// Visits every node parent-first (node, left, right).
    pub fn pre_order(&self) -> traverse::PreOrder<'_, T> {
        traverse::PreOrder::new(self.root())
    }

    /// Visits every node in sorted order (left, node, right).
    pub fn in_order(&self) -> traverse::InOrder<'_, T> {
        traverse::InOrder::new(self.root())
    }

    /// Visits every node children-first (left, right, node).
    pub fn post_order(&self) -> traverse::PostOrder<'_, T> {
        traverse::PostOrder::new(self.root())
    }

    /// Visits every node one level at a time, left to right. An empty tree yields nothing.
    pub fn level_order(&self) -> traverse::LevelOrder<'_, T> {
        traverse::LevelOrder::new(self.root())
    }

    /// Calls `visit` once for every node in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Order, Tree};
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(Order::PostOrder, |node| seen.push(*node.value()));
    /// assert_eq!(seen, [1, 3, 2]);
    /// ```
    pub fn traverse<F>(&self, order: Order, visit: F)
    where
        F: FnMut(&Node<T>),
    {
        traverse::walk(self.root(), order, visit);
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> traverse::Values<'_, T> {
        traverse::Values::new(self.root())
    }

    /// Returns something that draws the tree when displayed.
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty::new(self.root())
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Builds a height-balanced tree from values that are already sorted ascending and
    /// contain no duplicates. Any nodes already in the tree are dropped first.
    ///
    /// Each subtree is rooted at the lower median of its values, `values[(len - 1) / 2]`,
    /// so the shape for a given length is always the same.
    ///
    /// Passing unsorted or repeated values produces a tree that is not a valid BST. This is
    /// only checked in debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.build_tree(vec![1, 2, 3, 4, 5]);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 3);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(4));
    /// ```
    pub fn build_tree<I>(&mut self, sorted: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut values = sorted.into_iter();
        let len = values.len();
        let mut size = 0;
        let root = build(&mut values, len, &mut size);

        // Only the outermost call assigns the root.
        self.root = root;
        self.size = size;
        log::debug!("built tree of {} nodes", size);

        if cfg!(debug_assertions) {
            assert!(
                self.is_valid(),
                "`build_tree` requires sorted values without duplicates"
            );
        }
    }

    /// Constructs a tree with [`Tree::build_tree`].
    pub fn from_sorted<I>(sorted: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut tree = Self::new();
        tree.build_tree(sorted);
        tree
    }

    /// Potentially finds the node holding the given value. If no node holds it, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        self.root().and_then(|root| root.find(value))
    }

    /// Whether a node holds the given value.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Adds `value` as a new leaf. If the tree already holds an equal value nothing changes
    /// and [`Insert::AlreadyExists`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Insert, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Insert::Inserted);
    /// assert_eq!(tree.insert(1), Insert::AlreadyExists);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Insert {
        self.get_or_insert(value).1
    }

    /// Like [`Tree::insert`], but also hands back the node holding the value: the new leaf,
    /// or the node that already held an equal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Insert, Tree};
    ///
    /// let mut tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// let (node, outcome) = tree.get_or_insert(4);
    /// assert_eq!((*node.value(), outcome), (4, Insert::Inserted));
    /// assert!(node.is_leaf());
    ///
    /// let (node, outcome) = tree.get_or_insert(2);
    /// assert_eq!((*node.value(), outcome), (2, Insert::AlreadyExists));
    /// assert_eq!(node.left().map(|n| *n.value()), Some(1));
    /// ```
    pub fn get_or_insert(&mut self, value: T) -> (&Node<T>, Insert) {
        let (node, outcome) = insert_into(&mut self.root, value);

        match outcome {
            Insert::Inserted => self.size += 1,
            Insert::AlreadyExists => log::info!("value already exists, returning existing node"),
        }
        (node, outcome)
    }

    /// Removes the node holding `value` and returns the value. If the tree does not hold it,
    /// nothing happens and `None` is returned.
    ///
    /// A node with one child is replaced by that child. A node with two children takes the
    /// value of its in-order successor (the smallest value in its right subtree) and the
    /// successor's node is removed instead, its right subtree moving up into its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.delete(&4), Some(4));
    /// assert_eq!(tree.delete(&4), None);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        if !self.contains(value) {
            log::info!("value not found in tree, nothing deleted");
            return None;
        }

        let mut removed = None;
        self.root = delete_from(self.root.take(), value, &mut removed);
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// The number of edges between the root and the node holding `value`, or `None` if no
    /// node holds it.
    pub fn depth(&self, value: &T) -> Option<usize> {
        let root = self.root()?;
        root.depth_of(root.find(value)?)
    }

    /// The number of edges between the root and `node`, or `None` if `node` does not belong
    /// to this tree.
    pub fn depth_of(&self, node: &Node<T>) -> Option<usize> {
        self.root()?.depth_of(node)
    }

    /// Flattens the tree into its sorted values and rebuilds it with
    /// [`Tree::build_tree`]. Afterwards the tree is balanced and holds the same values.
    pub fn rebalance(&mut self) {
        let height = self.height();
        let values: Vec<T> = IntoValues::new(self.root.take()).collect();
        log::debug!(
            "rebalancing {} nodes from a height of {}",
            values.len(),
            height
        );
        self.build_tree(values);
    }

    /// Whether every node's left subtree holds only smaller values and its right subtree
    /// only larger ones.
    pub fn is_valid(&self) -> bool {
        self.root()
            .map_or(true, |root| root.is_valid_within(None, None))
    }
}

/// Builds a balanced subtree out of the next `len` values of `values`, counting the nodes
/// created into `size`.
fn build<T, I>(values: &mut I, len: usize, size: &mut usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build(values, mid, size);
    let mut node = Node::leaf(values.next()?);
    *size += 1;
    node.left = left;
    node.right = build(values, len - mid - 1, size);
    Some(node)
}

/// Descends from `slot` to where `value` belongs. Attaches a new leaf there if the slot is
/// empty and returns the node that ends up holding the value.
fn insert_into<T>(slot: &mut Link<T>, value: T) -> (&Node<T>, Insert)
where
    T: Ord,
{
    match slot {
        None => (&**slot.insert(Node::leaf(value)), Insert::Inserted),
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_into(&mut node.left, value),
            Ordering::Equal => (&**node, Insert::AlreadyExists),
            Ordering::Greater => insert_into(&mut node.right, value),
        },
    }
}

/// Deletes `value` from the subtree rooted at `link`, moving the deleted value into
/// `removed`, and returns what is left of the subtree.
fn delete_from<T>(link: Link<T>, value: &T, removed: &mut Option<T>) -> Link<T>
where
    T: Ord,
{
    let mut node = link?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete_from(node.left.take(), value, removed),
        Ordering::Greater => node.right = delete_from(node.right.take(), value, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                log::debug!("deleting leaf node");
                *removed = Some(node.value);
                return None;
            }
            // The surviving child takes the deleted node's slot, which keeps it on the
            // same side of the parent.
            (Some(child), None) | (None, Some(child)) => {
                log::debug!("deleting node with a single child");
                *removed = Some(node.value);
                return Some(child);
            }
            (Some(left), Some(right)) => {
                log::debug!("deleting node with two children via its in-order successor");
                let (successor, rest) = take_min(right);
                *removed = Some(mem::replace(&mut node.value, successor));
                node.left = Some(left);
                node.right = rest;
            }
        },
    }

    Some(node)
}

/// Detaches the leftmost node of the subtree rooted at `node`. Returns its value along
/// with the remaining subtree, where the leftmost node's right child has taken its place.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            log::trace!("found in-order successor");
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Sorts and deduplicates the values before building a balanced tree out of them.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = iter.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self::from_sorted(values)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts each value in turn. This does not rebalance.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoValues<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoValues::new(self.root)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = traverse::Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
