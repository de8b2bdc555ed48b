//! Fixed-size storage blocks.
//!
//! A [`Bucket`] is a boxed slice of default-initialised slots. Its length is
//! fixed at creation and the allocation is never resized, so the address of
//! every slot is stable for the bucket's lifetime.

/// A single fixed-capacity block of element slots.
pub struct Bucket<T> {
    /// Backing storage. Allocated to full capacity at creation.
    slots: Box<[T]>,
}

impl<T: Default> Bucket<T> {
    /// Allocate a bucket of `capacity` default-initialised slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(T::default).take(capacity).collect(),
        }
    }

    /// Move the value out of `offset`, leaving `T::default()` behind.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= capacity`.
    pub fn take(&mut self, offset: usize) -> T {
        std::mem::take(&mut self.slots[offset])
    }
}

impl<T> Bucket<T> {
    /// Shared reference to the slot at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= capacity`.
    #[inline]
    pub fn slot(&self, offset: usize) -> &T {
        &self.slots[offset]
    }

    /// Mutable reference to the slot at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= capacity`.
    #[inline]
    pub fn slot_mut(&mut self, offset: usize) -> &mut T {
        &mut self.slots[offset]
    }

    /// All slots, live or not.
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// All slots, mutably.
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Number of slots in this bucket.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Memory usage of the slot storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bucket_is_default_filled() {
        let bucket: Bucket<u32> = Bucket::new(8);
        assert_eq!(bucket.capacity(), 8);
        assert!(bucket.slots().iter().all(|&v| v == 0));
    }

    #[test]
    fn take_leaves_default() {
        let mut bucket: Bucket<String> = Bucket::new(2);
        *bucket.slot_mut(1) = "payload".to_string();
        assert_eq!(bucket.take(1), "payload");
        assert!(bucket.slot(1).is_empty());
    }

    #[test]
    fn memory_bytes_tracks_capacity() {
        let bucket: Bucket<u64> = Bucket::new(16);
        assert_eq!(bucket.memory_bytes(), 16 * 8);
    }
}
