//! A first-in, first-out queue.
//!
//! # Examples
//!
//! ```
//! use basic_collections::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.push(1);
//! queue.push(2);
//!
//! assert_eq!(queue.peek(), Ok(&1));
//! assert_eq!(queue.pop(), Ok(1));
//! assert_eq!(queue.pop(), Ok(2));
//! assert!(queue.pop().is_err());
//! ```

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// A FIFO queue backed by a ring buffer so both ends are `O(1)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    /// Generate a new, empty `Queue` with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
        }
    }

    /// The number of values waiting in the queue.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the queue has no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Adds `value` to the back of the queue.
    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Removes and returns the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.data.pop_front().ok_or_else(|| Error::empty("queue"))
    }

    /// The value at the front of the queue, which the next [`pop`][Self::pop] returns.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.data.front().ok_or_else(|| Error::empty("queue"))
    }

    /// Removes every value from the queue.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The values from front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.data.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}
