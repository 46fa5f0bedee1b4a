//! A doubly linked list arranged as a ring around a sentinel.
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index. Slot `0` is the sentinel:
//! it never holds a value, its `next` is the first element and its `prev` is the last. In an
//! empty list both point back at the sentinel itself. Slots of removed nodes are recycled by later
//! pushes.
//!
//! # Examples
//!
//! ```
//! use basic_collections::list::List;
//!
//! let mut list = List::new();
//! list.push_back([1, 2, 3]);
//! list.push_front([0]);
//!
//! assert_eq!(list.index(0), Ok(&0));
//! assert_eq!(list.index(-1), Ok(&3));
//! assert_eq!(list.find(&2), Some(2));
//! assert_eq!(list.range(1, -2), [&1, &2]);
//!
//! assert_eq!(list.pop_front(), Ok(0));
//! assert_eq!(list.pop_back(), Ok(3));
//! assert_eq!(list.len(), 2);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Slot index of the sentinel.
const SENTINEL: usize = 0;

#[derive(Clone)]
struct Slot<T> {
    /// `None` for the sentinel and for freed slots.
    value: Option<T>,
    next: usize,
    prev: usize,
}

impl<T> Slot<T> {
    fn sentinel() -> Self {
        Self {
            value: None,
            next: SENTINEL,
            prev: SENTINEL,
        }
    }
}

/// A doubly linked list supporting pushes and pops at both ends, positive and negative indexing,
/// and range slicing.
#[derive(Clone)]
pub struct List<T> {
    slots: Vec<Slot<T>>,
    /// Slots freed by pops, reused before growing `slots`.
    free: Vec<usize>,
    length: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Generate a new, empty `List`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generate a new, empty `List` with room for `capacity` values before reallocating.
    ///
    /// The list never gives memory back on its own: popped slots go on a free list for the next
    /// push, so storage stays at the largest length the list has reached. Call
    /// [`shrink_to_fit`][Self::shrink_to_fit] (or [`clear`][Self::clear]) to release it.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(Slot::sentinel());
        Self {
            slots,
            free: Vec::new(),
            length: 0,
        }
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the list has no values.
    pub fn is_empty(&self) -> bool {
        self.slots[SENTINEL].next == SENTINEL
    }

    /// Inserts each value at the front of the list, one after another. The last value pushed ends
    /// up first.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front([1, 2, 3]);
    ///
    /// assert_eq!(list.range(0, -1), [&3, &2, &1]);
    /// ```
    pub fn push_front<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            let first = self.slots[SENTINEL].next;
            self.link_between(value, SENTINEL, first);
        }
    }

    /// Appends each value to the back of the list, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back([1, 2, 3]);
    ///
    /// assert_eq!(list.range(0, -1), [&1, &2, &3]);
    /// ```
    pub fn push_back<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            let last = self.slots[SENTINEL].prev;
            self.link_between(value, last, SENTINEL);
        }
    }

    /// The position of the first value equal to `value`, scanning from the front.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// The value at `index`. Non-negative indexes count from the front starting at `0`. Negative
    /// indexes count from the back so `-1` is the last value, `-2` the one before it, etc.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if there is no value at that position.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::list::List;
    ///
    /// let list: List<_> = ["a", "b", "c"].into_iter().collect();
    ///
    /// assert_eq!(list.index(1), Ok(&"b"));
    /// assert_eq!(list.index(-3), Ok(&"a"));
    /// assert!(list.index(3).is_err());
    /// assert!(list.index(-4).is_err());
    /// ```
    pub fn index(&self, index: isize) -> Result<&T> {
        self.slot_at(index)
            .and_then(|slot| self.slots[slot].value.as_ref())
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.length,
            })
    }

    /// The first value in the list.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn front(&self) -> Result<&T> {
        self.slots[self.slots[SENTINEL].next]
            .value
            .as_ref()
            .ok_or_else(|| Error::empty("list"))
    }

    /// The last value in the list.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn back(&self) -> Result<&T> {
        self.slots[self.slots[SENTINEL].prev]
            .value
            .as_ref()
            .ok_or_else(|| Error::empty("list"))
    }

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let first = self.slots[SENTINEL].next;
        self.unlink(first).ok_or_else(|| Error::empty("list"))
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let last = self.slots[SENTINEL].prev;
        self.unlink(last).ok_or_else(|| Error::empty("list"))
    }

    /// The values from `start` to `end`, both inclusive, in front-to-back order.
    ///
    /// Both bounds may be negative and are normalized first: a bound past the end means the last
    /// value, a bound before `-len` means the first value, and other negative bounds count from
    /// the back. If `start` comes after `end` once normalized, or the list is empty, the result is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::list::List;
    ///
    /// let list: List<_> = (0..5).collect();
    ///
    /// assert_eq!(list.range(1, 3), [&1, &2, &3]);
    /// assert_eq!(list.range(-2, 100), [&3, &4]);
    /// assert_eq!(list.range(-100, 0), [&0]);
    /// assert!(list.range(3, 1).is_empty());
    /// ```
    pub fn range(&self, start: isize, end: isize) -> Vec<&T> {
        if self.is_empty() {
            return Vec::new();
        }

        let start = self.normal_index(start);
        let end = self.normal_index(end);
        if start > end {
            return Vec::new();
        }

        self.iter().skip(start).take(end - start + 1).collect()
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        debug!(len = self.length, "clearing list");
        self.slots.truncate(1);
        self.slots[SENTINEL] = Slot::sentinel();
        self.free.clear();
        self.length = 0;
    }

    /// Moves the values into consecutive slots in list order, dropping the freed slots and as
    /// much spare capacity as possible. Indexes and iteration order are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::list::List;
    ///
    /// let mut list: List<_> = (0..100).collect();
    /// for _ in 0..90 {
    ///     list.pop_front().unwrap();
    /// }
    ///
    /// list.shrink_to_fit();
    /// assert_eq!(list.len(), 10);
    /// assert_eq!(list.index(0), Ok(&90));
    /// ```
    pub fn shrink_to_fit(&mut self) {
        debug!(
            len = self.length,
            freed = self.free.len(),
            "compacting list slots"
        );

        let mut slots = Vec::with_capacity(self.length + 1);
        slots.push(Slot::sentinel());
        let mut cursor = self.slots[SENTINEL].next;
        while cursor != SENTINEL {
            let next = self.slots[cursor].next;
            let index = slots.len();
            slots.push(Slot {
                value: self.slots[cursor].value.take(),
                next: index + 1,
                prev: index - 1,
            });
            cursor = next;
        }

        let last = slots.len() - 1;
        slots[last].next = SENTINEL;
        slots[SENTINEL].prev = last;
        if last != SENTINEL {
            slots[SENTINEL].next = 1;
        }

        self.slots = slots;
        self.free = Vec::new();
    }

    /// A front-to-back iterator over the values. It can also be walked back-to-front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.slots[SENTINEL].next,
            back: self.slots[SENTINEL].prev,
            remaining: self.length,
        }
    }

    /// Folds `index` into `0..len`. Must not be called on an empty list.
    fn normal_index(&self, index: isize) -> usize {
        let len = self.length as isize;
        let index = if index > len - 1 {
            len - 1
        } else if index < -len {
            0
        } else {
            index
        };

        (len + index).rem_euclid(len) as usize
    }

    /// Resolves `index` to a slot by walking from the front (non-negative) or from the back
    /// (negative).
    fn slot_at(&self, index: isize) -> Option<usize> {
        let (mut slot, steps) = if index >= 0 {
            (self.slots[SENTINEL].next, index.unsigned_abs())
        } else {
            (self.slots[SENTINEL].prev, index.unsigned_abs() - 1)
        };
        if steps >= self.length {
            return None;
        }

        for _ in 0..steps {
            slot = if index >= 0 {
                self.slots[slot].next
            } else {
                self.slots[slot].prev
            };
        }

        Some(slot)
    }

    /// Stores `value` in a slot linked between `prev` and `next`, which must be adjacent.
    fn link_between(&mut self, value: T, prev: usize, next: usize) {
        debug_assert_eq!(self.slots[prev].next, next);
        debug_assert_eq!(self.slots[next].prev, prev);

        let slot = Slot {
            value: Some(value),
            next,
            prev,
        };
        let index = match self.free.pop() {
            Some(index) => {
                trace!(slot = index, "reusing freed list slot");
                self.slots[index] = slot;
                index
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        self.slots[prev].next = index;
        self.slots[next].prev = index;
        self.length += 1;
    }

    /// Unlinks the node in `index` and returns its value. The sentinel can't be unlinked: asking
    /// for it returns `None`, which is how an empty list reports itself to the pops.
    fn unlink(&mut self, index: usize) -> Option<T> {
        if index == SENTINEL {
            return None;
        }

        let Slot { prev, next, .. } = self.slots[index];
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        self.slots[index].next = index;
        self.slots[index].prev = index;
        self.free.push(index);
        self.length -= 1;

        self.slots[index].value.take()
    }
}

impl<T> fmt::Debug for List<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for List<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T> Eq for List<T> where T: Eq {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.push_back(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back(iter);
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// A borrowing iterator over a [`List`]. Created by [`List::iter`].
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = &self.slots[self.front];
        self.front = slot.next;
        self.remaining -= 1;
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = &self.slots[self.back];
        self.back = slot.prev;
        self.remaining -= 1;
        slot.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over a [`List`], popping from the front.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}


#[cfg(test)]
mod quicktests {
    use std::collections::VecDeque;

    use super::*;
    use crate::test::quick::DequeOp;

    /// Reference version of `range` built on a `VecDeque`.
    fn model_range(model: &VecDeque<i8>, start: isize, end: isize) -> Vec<&i8> {
        if model.is_empty() {
            return Vec::new();
        }
        let len = model.len() as isize;
        let fold = |i: isize| -> isize {
            if i >= len {
                len - 1
            } else if i < -len {
                0
            } else if i < 0 {
                len + i
            } else {
                i
            }
        };
        let (start, end) = (fold(start), fold(end));
        if start > end {
            return Vec::new();
        }
        model
            .iter()
            .skip(start as usize)
            .take((end - start + 1) as usize)
            .collect()
    }

    /// Applies the operations to a list and a `VecDeque` and checks they agree at every step.
    fn do_ops(ops: &[DequeOp<i8>], list: &mut List<i8>, model: &mut VecDeque<i8>) {
        for op in ops {
            match *op {
                DequeOp::PushFront(v) => {
                    list.push_front([v]);
                    model.push_front(v);
                }
                DequeOp::PushBack(v) => {
                    list.push_back([v]);
                    model.push_back(v);
                }
                DequeOp::PopFront => assert_eq!(list.pop_front().ok(), model.pop_front()),
                DequeOp::PopBack => assert_eq!(list.pop_back().ok(), model.pop_back()),
                DequeOp::Index(i) => {
                    let expected = if i >= 0 {
                        model.get(i as usize)
                    } else {
                        model.len().checked_sub(i.unsigned_abs() as usize).and_then(|i| model.get(i))
                    };
                    assert_eq!(list.index(i as isize).ok(), expected);
                }
                DequeOp::Range(s, e) => {
                    assert_eq!(
                        list.range(s as isize, e as isize),
                        model_range(model, s as isize, e as isize)
                    );
                }
            }
            assert_eq!(list.len(), model.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<DequeOp<i8>>) -> bool {
            let mut list = List::new();
            let mut model = VecDeque::new();

            do_ops(&ops, &mut list, &mut model);
            list.assert_closed_ring();
            list.iter().eq(model.iter())
        }
    }

    quickcheck::quickcheck! {
        fn push_back_pop_front_is_fifo(xs: Vec<i8>) -> bool {
            let mut list = List::new();
            list.push_back(xs.iter().copied());

            let popped: Vec<_> = std::iter::from_fn(|| list.pop_front().ok()).collect();
            popped == xs && list.is_empty()
        }
    }

    quickcheck::quickcheck! {
        fn push_back_pop_back_is_lifo(xs: Vec<i8>) -> bool {
            let mut list = List::new();
            list.push_back(xs.iter().copied());

            let popped: Vec<_> = std::iter::from_fn(|| list.pop_back().ok()).collect();
            popped.into_iter().eq(xs.into_iter().rev()) && list.is_empty()
        }
    }
}
