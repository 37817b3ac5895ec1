use std::cmp::Ordering;
use std::ptr;

use crate::traverse::{self, Order};

/// An owned, possibly absent, child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one value and exclusively owns up to two children. It keeps no pointer
/// back to its parent. Nodes are created and destroyed by the [`Tree`][crate::Tree] that
/// owns them; callers only ever see shared references.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The leftmost node of this subtree, i.e. the one holding the smallest value.
    pub fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The rightmost node of this subtree, i.e. the one holding the largest value.
    pub fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        height(self.left()).max(height(self.right())) + 1
    }

    /// Whether, for every node in this subtree, the heights of its two children differ by at
    /// most one. Stops at the first node that violates this.
    pub fn is_balanced(&self) -> bool {
        self.balanced_height().is_some()
    }

    /// The height of this subtree if it is balanced, `None` otherwise.
    fn balanced_height(&self) -> Option<usize> {
        let left = self.left().map_or(Some(0), Self::balanced_height)?;
        let right = self.right().map_or(Some(0), Self::balanced_height)?;
        if left.abs_diff(right) > 1 {
            return None;
        }
        Some(left.max(right) + 1)
    }

    /// Searches this subtree for the node holding `value`, descending left or right by
    /// comparing against each node on the way.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
    /// let two = tree.find(&2).unwrap();
    ///
    /// assert_eq!(two.find(&1).map(|n| *n.value()), Some(1));
    /// assert_eq!(two.find(&3).map(|n| *n.value()), Some(3));
    /// // 6 is in the tree but not below 2.
    /// assert!(two.find(&6).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// The number of edges from this node down to `target`, or `None` when `target` is not
    /// this node or one of its descendants. Nodes are matched by identity, not by value.
    pub fn depth_of(&self, target: &Self) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = Some(self);
        let mut depth = 0;
        while let Some(node) = current {
            if ptr::eq(node, target) {
                return Some(depth);
            }
            current = match target.value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return None,
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// Visits the nodes of this subtree parent-first (node, left, right).
    pub fn pre_order(&self) -> traverse::PreOrder<'_, T> {
        traverse::PreOrder::new(Some(self))
    }

    /// Visits the nodes of this subtree in sorted order (left, node, right).
    pub fn in_order(&self) -> traverse::InOrder<'_, T> {
        traverse::InOrder::new(Some(self))
    }

    /// Visits the nodes of this subtree children-first (left, right, node).
    pub fn post_order(&self) -> traverse::PostOrder<'_, T> {
        traverse::PostOrder::new(Some(self))
    }

    /// Visits the nodes of this subtree one level at a time, left to right.
    pub fn level_order(&self) -> traverse::LevelOrder<'_, T> {
        traverse::LevelOrder::new(Some(self))
    }

    /// Calls `visit` once for every node of this subtree in the given order.
    pub fn traverse<F>(&self, order: Order, visit: F)
    where
        F: FnMut(&Self),
    {
        traverse::walk(Some(self), order, visit);
    }

    /// Checks the strict ordering invariant for this subtree given exclusive bounds
    /// inherited from its ancestors.
    pub(crate) fn is_valid_within(&self, lower: Option<&T>, upper: Option<&T>) -> bool
    where
        T: Ord,
    {
        if lower.map_or(false, |lower| self.value <= *lower)
            || upper.map_or(false, |upper| self.value >= *upper)
        {
            return false;
        }
        self.left()
            .map_or(true, |l| l.is_valid_within(lower, Some(&self.value)))
            && self
                .right()
                .map_or(true, |r| r.is_valid_within(Some(&self.value), upper))
    }
}

/// The height of a possibly absent subtree. An absent subtree has a height of 0.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, Node::height)
}
