//! The bucketed arena.
//!
//! [`BucketArena`] stores elements in a growable sequence of fixed-size
//! [`Bucket`]s. Growth appends one bucket at a time and never moves
//! existing buckets, so slot addresses are stable under `push`. Removal is
//! swap-with-last: `delete(k)` moves the element at `len - 1` into `k`.
//!
//! # Reference validity
//!
//! References returned by [`push`](BucketArena::push),
//! [`get`](BucketArena::get) and friends are ordinary borrows. The borrow
//! checker ends them at the next `&mut self` call, which covers every
//! removal-class operation (`delete`, `pop`, `prune`). The *address* of a
//! live slot does not change across pushes, so callers that need a durable
//! handle should keep the logical index and re-borrow.
//!
//! # Batch deletion
//!
//! Deleting index `k` relocates only the last element. When removing many
//! indices in one pass, iterate from highest to lowest:
//!
//! ```rust
//! use silo_arena::BucketArena;
//!
//! let mut arena = BucketArena::with_bucket_capacity(4);
//! for v in 0..10u32 {
//!     arena.push(v);
//! }
//! for index in (2..=5).rev() {
//!     arena.delete(index).unwrap();
//! }
//! assert_eq!(arena.len(), 6);
//! assert_eq!(arena.get(0), Some(&0));
//! assert_eq!(arena.get(1), Some(&1));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::bucket::Bucket;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::layout::BucketLayout;

/// Growable, address-stable element store with O(1) swap-delete.
///
/// Bucket capacity is fixed at construction. No memory is allocated until
/// the first [`push`](Self::push).
pub struct BucketArena<T> {
    buckets: Vec<Bucket<T>>,
    layout: BucketLayout,
    /// Number of live elements.
    len: usize,
}

impl<T> BucketArena<T> {
    /// Create an empty arena with the default bucket capacity (1024).
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty arena with `bucket_capacity` slots per bucket.
    ///
    /// Zero selects the default capacity.
    pub fn with_bucket_capacity(bucket_capacity: usize) -> Self {
        Self::with_config(ArenaConfig::new(bucket_capacity))
    }

    /// Create an empty arena from a config.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            buckets: Vec::new(),
            layout: BucketLayout::new(config.effective_bucket_capacity()),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the arena holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots per bucket.
    pub fn bucket_capacity(&self) -> usize {
        self.layout.bucket_capacity()
    }

    /// Number of buckets currently allocated.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total allocated slots across all buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.iter().map(Bucket::capacity).sum()
    }

    /// Memory held by bucket storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buckets.iter().map(Bucket::memory_bytes).sum()
    }

    /// Index decomposition rules in use.
    pub fn layout(&self) -> &BucketLayout {
        &self.layout
    }

    /// Shared reference to the element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let loc = self.layout.locate(index);
        Some(self.buckets[loc.bucket].slot(loc.offset))
    }

    /// Mutable reference to the element at `index`, or `None` past the end.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let loc = self.layout.locate(index);
        Some(self.buckets[loc.bucket].slot_mut(loc.offset))
    }

    /// Iterate live elements in logical index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.buckets.iter().flat_map(bucket_slots::<T> as SlotsFn<'_, T>),
            remaining: self.len,
        }
    }

    /// Iterate live elements mutably in logical index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self
                .buckets
                .iter_mut()
                .flat_map(bucket_slots_mut::<T> as SlotsMutFn<'_, T>),
            remaining: self.len,
        }
    }
}

impl<T: Default> BucketArena<T> {
    /// Append `value` at index `len()` and return a reference to its slot.
    ///
    /// Allocates exactly one new bucket when the current ones are full.
    /// Existing buckets are never reallocated or copied.
    pub fn push(&mut self, value: T) -> &mut T {
        let loc = self.layout.locate(self.len);
        debug_assert!(loc.bucket <= self.buckets.len());
        if loc.bucket == self.buckets.len() {
            self.grow();
        }
        self.len += 1;
        let slot = self.buckets[loc.bucket].slot_mut(loc.offset);
        *slot = value;
        slot
    }

    /// Remove the element at `index` by swapping in the last element.
    ///
    /// Returns the removed value. The element previously at `len() - 1`
    /// now lives at `index`; every other element keeps its index. The
    /// vacated last slot is reset to `T::default()`.
    ///
    /// Returns [`ArenaError::OutOfBounds`] without modifying the arena
    /// when `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Result<T, ArenaError> {
        if index >= self.len {
            return Err(ArenaError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        let last_index = self.len - 1;
        let last = self.layout.locate(last_index);
        let tail = self.buckets[last.bucket].take(last.offset);
        self.len = last_index;
        if index == last_index {
            return Ok(tail);
        }
        let target = self.layout.locate(index);
        Ok(std::mem::replace(
            self.buckets[target.bucket].slot_mut(target.offset),
            tail,
        ))
    }

    /// Remove and return the last element, leaving `T::default()` in its slot.
    ///
    /// Returns [`ArenaError::Empty`] when there are no live elements.
    pub fn pop(&mut self) -> Result<T, ArenaError> {
        let Some(last_index) = self.len.checked_sub(1) else {
            return Err(ArenaError::Empty);
        };
        let loc = self.layout.locate(last_index);
        self.len = last_index;
        Ok(self.buckets[loc.bucket].take(loc.offset))
    }

    /// Release trailing buckets that hold no live elements.
    ///
    /// Keeps exactly as many buckets as `len()` requires. Slots inside the
    /// retained buckets are not touched. The arena never calls this itself.
    pub fn prune(&mut self) {
        let retained = self.layout.buckets_for(self.len);
        let released = self.buckets.len().saturating_sub(retained);
        if released > 0 {
            self.buckets.truncate(retained);
            tracing::debug!(
                released,
                retained,
                len = self.len,
                "pruned trailing arena buckets"
            );
        }
        self.buckets.shrink_to_fit();
    }

    fn grow(&mut self) {
        let capacity = self.layout.bucket_capacity();
        self.buckets.push(Bucket::new(capacity));
        tracing::trace!(
            bucket = self.buckets.len() - 1,
            bucket_capacity = capacity,
            "allocated arena bucket"
        );
    }
}

impl<T> Default for BucketArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BucketArena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for BucketArena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.get(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> IndexMut<usize> for BucketArena<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T: Default> Extend<T> for BucketArena<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Default> FromIterator<T> for BucketArena<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arena = Self::new();
        arena.extend(iter);
        arena
    }
}

impl<'a, T> IntoIterator for &'a BucketArena<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BucketArena<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

type SlotsFn<'a, T> = fn(&'a Bucket<T>) -> slice::Iter<'a, T>;
type SlotsMutFn<'a, T> = fn(&'a mut Bucket<T>) -> slice::IterMut<'a, T>;

fn bucket_slots<T>(bucket: &Bucket<T>) -> slice::Iter<'_, T> {
    bucket.slots().iter()
}

fn bucket_slots_mut<T>(bucket: &mut Bucket<T>) -> slice::IterMut<'_, T> {
    bucket.slots_mut().iter_mut()
}

/// Iterator over live elements of a [`BucketArena`].
pub struct Iter<'a, T> {
    inner: std::iter::FlatMap<slice::Iter<'a, Bucket<T>>, slice::Iter<'a, T>, SlotsFn<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over live elements of a [`BucketArena`].
pub struct IterMut<'a, T> {
    inner: std::iter::FlatMap<
        slice::IterMut<'a, Bucket<T>>,
        slice::IterMut<'a, T>,
        SlotsMutFn<'a, T>,
    >,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
