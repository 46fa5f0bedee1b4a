//! This crate exposes a handful of foundational generic collections, mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored values. BSTs are defined recursively using the notion of a `Node`. A `Node` stores a
//! value and sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching takes `O(height)`. The [`binary_search_tree::Tree`] here doesn't rebalance so its
//! height depends on insertion order: sorted input gives a tree shaped like a linked list. Sorted
//! iteration falls out of visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Linked List
//!
//! [`list::List`] is a doubly linked list closed into a ring by a sentinel node that never holds a
//! value. The sentinel's `next` is the first element and its `prev` is the last, so both ends are
//! reached in `O(1)` and an empty list is just the sentinel pointing at itself. The ring supports
//! indexing from either end and slicing with negative bounds.
//!
//! ## Wrappers
//!
//! [`queue::Queue`] (FIFO) and [`stack::Stack`] (LIFO) wrap standard library buffers.
//! [`set::Set`] wraps a `HashSet` behind a reader/writer lock so it can be shared between threads.
//!
//! ## Errors
//!
//! Operations that must produce an element (pops, peeks, min/max, indexing) return
//! [`Result`](error::Result). Operations on values that may simply be absent (finding, deleting,
//! duplicate inserts) report it with a `bool` or `Option`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_search_tree;
pub mod error;
pub mod list;
pub mod queue;
pub mod set;
pub mod stack;

pub use error::{Error, Result};
