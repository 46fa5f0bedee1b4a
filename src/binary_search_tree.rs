//! An unbalanced Binary Search Tree of ordered values. Each `Node` exclusively owns its two
//! optional children so there is no parent pointer and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use basic_collections::binary_search_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.find_min().is_err());
//!
//! tree.insert(5);
//! tree.insert(1);
//! tree.insert(9);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.find_max(), Ok(&9));
//!
//! // Inserting an existing value is dropped.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 3);
//!
//! // Deleting reports whether a node was actually removed.
//! assert!(tree.delete(&5));
//! assert!(!tree.delete(&5));
//!
//! let mut sorted = Vec::new();
//! tree.walk(|value| sorted.push(*value));
//! assert_eq!(sorted, [1, 9]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree that doesn't balance itself. Values are kept in order according to `Ord`
/// and each value is stored at most once.
pub struct Tree<K> {
    root: Link<K>,
    /// How many nodes are in the tree.
    count: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unlink nodes onto a heap allocated stack so that dropping a tall (e.g. sorted input)
        // tree doesn't recurse once per level.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("count", &self.count)
            .field("root", &self.root)
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts `value` into the tree. It descends right while the current value is smaller and
    /// left while it is larger, attaching a new leaf at the first empty slot.
    ///
    /// A value that is already in the tree is dropped without changing the tree. Returns whether
    /// a new node was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::binary_search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: K) -> bool
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match value.cmp(&node.value) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    trace!("dropping insert of a value already in the tree");
                    return false;
                }
            }
        }

        *slot = Some(Node::new_boxed(value));
        self.count += 1;
        true
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &K) -> bool
    where
        K: Ord,
    {
        self.find(value).is_some()
    }

    /// Finds the node storing `value`, if there is one. The returned [`Node`] can be used to
    /// inspect the shape of the tree below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::binary_search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// let node = tree.find(&2).unwrap();
    /// assert_eq!(node.value(), &2);
    /// assert_eq!(node.right().map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the tree is empty.
    pub fn find_min(&self) -> Result<&K> {
        self.root
            .as_deref()
            .map(|root| &root.leftmost().value)
            .ok_or_else(|| Error::empty("tree"))
    }

    /// The largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the tree is empty.
    pub fn find_max(&self) -> Result<&K> {
        self.root
            .as_deref()
            .map(|root| &root.rightmost().value)
            .ok_or_else(|| Error::empty("tree"))
    }

    /// Deletes `value` from the tree. Returns whether a node was removed. Deleting a value that
    /// isn't in the tree does nothing.
    ///
    /// A node with at most one child is replaced by that child. A node with two children takes
    /// the value of its successor (the minimum of its right subtree) and the successor's node is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::binary_search_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert_eq!(tree.find_min(), Ok(&1));
    /// assert_eq!(tree.len(), 2);
    ///
    /// assert!(!tree.delete(&42));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete(&mut self, value: &K) -> bool
    where
        K: Ord,
    {
        let deleted = Node::delete(&mut self.root, value);
        if deleted {
            self.count -= 1;
            trace!(remaining = self.count, "deleted node from tree");
        }

        deleted
    }

    /// Calls `visit` on every value in ascending order (left subtree, node, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::binary_search_tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// let mut total = 0;
    /// tree.walk(|value| total = total * 10 + value);
    /// assert_eq!(total, 123);
    /// ```
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        for value in self.iter() {
            visit(value);
        }
    }

    /// An iterator over the values of the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.count)
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` stores a value and owns up to two children. Everything in the `left` subtree is
/// smaller than `value` and everything in the `right` subtree is larger.
#[derive(Debug)]
pub struct Node<K> {
    value: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(value: K) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The root of the left subtree, holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// Deletes `value` from the subtree in `link`, replacing the node in `link` if it is the one
    /// being deleted. Returns whether a node was removed.
    fn delete(mut link: &mut Link<K>, value: &K) -> bool
    where
        K: Ord,
    {
        // Walk a cursor down to the slot holding `value`.
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }

            let Some(node) = link.as_mut() else {
                return false;
            };
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }

        let Some(node) = link else {
            return false;
        };
        match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = Self::take_min(&mut node.right) {
                    node.value = successor;
                }
            }
            // Zero or one child: that child (or nothing) takes this node's slot.
            (left, right) => *link = left.or(right),
        }

        if cfg!(debug_assertions) {
            if let Some(node) = link.as_deref() {
                node.assert_ordered_children();
            }
        }
        true
    }

    /// Unlinks the smallest node of the subtree in `link` and returns its value. Its right child
    /// (it can't have a left one) takes its place.
    fn take_min(mut link: &mut Link<K>) -> Option<K> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min.value)
    }

    fn assert_ordered_children(&self)
    where
        K: Ord,
    {
        if let Some(left) = self.left() {
            assert!(left.value < self.value);
        }
        if let Some(right) = self.right() {
            assert!(self.value < right.value);
        }
    }
}

/// An in-order iterator over the values of a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, K> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet. The top of
    /// the stack is always the next value.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
