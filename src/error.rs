//! Errors shared by every collection in this crate.

use thiserror::Error;

/// Reasons an operation on a collection can fail.
///
/// Operations that look for something that may legitimately be missing (e.g.
/// [`Tree::delete`][crate::binary_search_tree::Tree::delete] or
/// [`List::find`][crate::list::List::find]) report that with a `bool` or an
/// `Option` instead. Operations that must hand back an element return this error
/// when there isn't one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tried to pop, peek, or take the min/max of an empty collection.
    #[error("cannot take an element from an empty {collection}")]
    EmptyCollection {
        /// Which kind of collection was empty, e.g. `"tree"` or `"queue"`.
        collection: &'static str,
    },

    /// Tried to access a list position that doesn't exist.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The index as the caller passed it (possibly negative).
        index: isize,
        /// The length of the list at the time of the access.
        len: usize,
    },
}

/// A `Result` specialized to this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn empty(collection: &'static str) -> Self {
        Self::EmptyCollection { collection }
    }
}
