//! A last-in, first-out stack.
//!
//! # Examples
//!
//! ```
//! use basic_collections::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.pop().is_err());
//! ```

use crate::error::{Error, Result};

/// A LIFO stack backed by a `Vec` whose end is the top of the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    /// Generate a new, empty `Stack`.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Generate a new, empty `Stack` with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the stack has no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the value on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or_else(|| Error::empty("stack"))
    }

    /// The value on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.data.last().ok_or_else(|| Error::empty("stack"))
    }

    /// Removes every value from the stack.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The values from the bottom of the stack to the top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.data.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}
