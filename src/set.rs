//! A thread-safe unordered set.
//!
//! Reads (`exists`, `all`, `len`, `flatten`) share a reader/writer lock and can run at the same
//! time as each other. Writes (`add`, `remove`, `clear`) take it exclusively. `flatten` caches
//! its snapshot until the next write.
//!
//! # Examples
//!
//! ```
//! use basic_collections::set::Set;
//!
//! let set: Set<_> = [1, 2, 3].into_iter().collect();
//! set.add([3, 4]);
//! set.remove(&[1]);
//!
//! assert!(set.exists(&4));
//! assert!(set.all(&[2, 3, 4]));
//! assert!(!set.all(&[1, 2]));
//! assert_eq!(set.len(), 3);
//!
//! let mut flat = set.flatten().to_vec();
//! flat.sort_unstable();
//! assert_eq!(flat, [2, 3, 4]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock, RwLockUpgradableReadGuard};
use tracing::{debug, trace};

struct Inner<T> {
    items: HashSet<T>,
    /// Snapshot handed out by `flatten`. Cleared by every write.
    flattened: Option<Arc<[T]>>,
}

impl<T> Inner<T> {
    fn invalidate(&mut self) {
        self.flattened = None;
    }
}

/// A set that can be shared between threads (e.g. in an `Arc`) and used through `&self`.
pub struct Set<T> {
    inner: RwLock<Inner<T>>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Set<T> {
    /// Generate a new, empty `Set`.
    pub fn new() -> Self {
        Self::from_items(HashSet::new())
    }

    fn from_items(items: HashSet<T>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                items,
                flattened: None,
            }),
        }
    }

    /// The number of items in the set.
    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    /// Whether the set has no items.
    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }

    /// Removes every item from the set.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.items.clear();
        inner.invalidate();
    }
}

impl<T> Set<T>
where
    T: Hash + Eq,
{
    /// Generate a new, empty `Set` with room for `capacity` items before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_items(HashSet::with_capacity(capacity))
    }

    /// Hands the set back to `pool`, which empties it and keeps its allocation for a later
    /// [`acquire`][SetPool::acquire]. Just dropping the set frees it instead.
    pub fn dispose(self, pool: &SetPool<T>) {
        debug!(len = self.len(), "disposing set");
        pool.release(self);
    }

    /// Adds every item to the set. Items already in the set are left alone.
    pub fn add<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut inner = self.inner.write();
        inner.invalidate();
        inner.items.extend(items);
    }

    /// Removes every given item from the set. Items that aren't in the set are ignored.
    pub fn remove<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut inner = self.inner.write();
        inner.invalidate();
        for item in items {
            inner.items.remove(item);
        }
    }

    /// Whether `item` is in the set.
    pub fn exists(&self, item: &T) -> bool {
        self.inner.read().items.contains(item)
    }

    /// Whether every given item is in the set. Checked under one lock so a concurrent write is
    /// either entirely seen or not at all. Vacuously true for no items.
    pub fn all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let inner = self.inner.read();
        items.into_iter().all(|item| inner.items.contains(item))
    }

    /// A snapshot of the items in no particular order. Until the set is written to again, every
    /// call returns the same shared snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use basic_collections::set::Set;
    ///
    /// let set: Set<_> = ["a"].into_iter().collect();
    ///
    /// let first = set.flatten();
    /// assert!(Arc::ptr_eq(&first, &set.flatten()));
    ///
    /// set.add(["b"]);
    /// assert_eq!(set.flatten().len(), 2);
    /// ```
    pub fn flatten(&self) -> Arc<[T]>
    where
        T: Clone,
    {
        if let Some(flattened) = &self.inner.read().flattened {
            return Arc::clone(flattened);
        }

        // Only one upgradable reader at a time so the snapshot is built once even if several
        // threads miss the cache together. Plain readers still get through.
        let inner = self.inner.upgradable_read();
        if let Some(flattened) = &inner.flattened {
            return Arc::clone(flattened);
        }

        let mut inner = RwLockUpgradableReadGuard::upgrade(inner);
        let flattened: Arc<[T]> = inner.items.iter().cloned().collect();
        trace!(len = flattened.len(), "rebuilt flattened set snapshot");
        inner.flattened = Some(Arc::clone(&flattened));
        flattened
    }
}

impl<T> FromIterator<T> for Set<T>
where
    T: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<T> fmt::Debug for Set<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.read().items.iter()).finish()
    }
}

/// A free list of emptied [`Set`]s. Releasing a set clears it but keeps its allocation so a later
/// [`acquire`][SetPool::acquire] can reuse it.
pub struct SetPool<T> {
    free: Mutex<Vec<Set<T>>>,
    max_pooled: usize,
}

impl<T> SetPool<T>
where
    T: Hash + Eq,
{
    /// The number of released sets a pool built with [`new`][SetPool::new] keeps around.
    pub const DEFAULT_MAX_POOLED: usize = 16;

    /// Generate a pool that keeps up to [`DEFAULT_MAX_POOLED`][Self::DEFAULT_MAX_POOLED] sets.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_POOLED)
    }

    /// Generate a pool that keeps up to `max_pooled` released sets. Sets released beyond that
    /// are dropped.
    pub fn with_capacity(max_pooled: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(max_pooled)),
            max_pooled,
        }
    }

    /// Takes a set from the pool, or makes a new one if the pool is empty, and fills it with
    /// `items`.
    pub fn acquire<I>(&self, items: I) -> Set<T>
    where
        I: IntoIterator<Item = T>,
    {
        let set = match self.free.lock().pop() {
            Some(set) => {
                trace!("reusing pooled set");
                set
            }
            None => Set::new(),
        };
        set.add(items);
        set
    }

    /// Empties `set` and returns it to the pool.
    pub fn release(&self, set: Set<T>) {
        set.clear();
        let mut free = self.free.lock();
        if free.len() < self.max_pooled {
            free.push(set);
        } else {
            trace!(max_pooled = self.max_pooled, "pool full, dropping released set");
        }
    }

    /// The number of sets waiting in the pool.
    pub fn pooled(&self) -> usize {
        self.free.lock().len()
    }
}

impl<T> Default for SetPool<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn sorted<T: Ord + Clone>(flat: Arc<[T]>) -> Vec<T> {
        let mut values = flat.to_vec();
        values.sort();
        values
    }

    #[test]
    fn add_and_remove() {
        let set = Set::new();
        set.add([1, 2, 2, 3]);

        assert_eq!(set.len(), 3);
        assert!(set.exists(&2));

        set.remove(&[2, 42]);
        assert!(!set.exists(&2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn all_items() {
        let set: Set<_> = ["a", "b"].into_iter().collect();

        assert!(set.all(&["a", "b"]));
        assert!(!set.all(&["a", "c"]));
        assert!(set.all(&[]));
    }

    #[test]
    fn flatten_is_cached_until_write() {
        let set: Set<_> = [3, 1, 2].into_iter().collect();

        let first = set.flatten();
        assert_eq!(sorted(Arc::clone(&first)), [1, 2, 3]);
        assert!(Arc::ptr_eq(&first, &set.flatten()));

        set.remove(&[1]);
        let second = set.flatten();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(sorted(second), [2, 3]);

        set.clear();
        assert!(set.flatten().is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn concurrent_readers_and_writers() {
        let set = Set::with_capacity(400);

        thread::scope(|s| {
            for t in 0..4 {
                let set = &set;
                s.spawn(move || {
                    for x in 0..100 {
                        set.add([t * 100 + x]);
                        assert!(set.exists(&(t * 100 + x)));
                        let _ = set.flatten();
                    }
                });
            }
        });

        assert_eq!(set.len(), 400);
        assert_eq!(sorted(set.flatten()), (0..400).collect::<Vec<_>>());
    }

    #[test]
    fn dispose_returns_to_pool() {
        let pool = SetPool::new();
        let set: Set<_> = (0..10).collect();
        let flat = set.flatten();

        set.dispose(&pool);
        assert_eq!(pool.pooled(), 1);

        // The reused set starts empty, with no stale snapshot from before it was disposed.
        let reused = pool.acquire([]);
        assert!(reused.is_empty());
        assert!(reused.flatten().is_empty());
        assert_eq!(flat.len(), 10);
    }

    #[test]
    fn pool_reuses_released_sets() {
        let pool = SetPool::with_capacity(1);

        let a = pool.acquire([1, 2]);
        let b = pool.acquire([3]);
        assert_eq!(a.len(), 2);

        pool.release(a);
        pool.release(b);
        assert_eq!(pool.pooled(), 1);

        let c = pool.acquire([9]);
        assert_eq!(pool.pooled(), 0);
        assert_eq!(sorted(c.flatten()), [9]);
    }
}
