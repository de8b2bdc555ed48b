//! Logical index → bucket slot decomposition.
//!
//! A [`BucketLayout`] is derived once from the bucket capacity. When the
//! capacity is a power of two, [`BucketLayout::locate`] uses shift/mask
//! arithmetic; otherwise it falls back to division and remainder. Both
//! paths produce identical results for every index.

/// Physical position of a logical index: which bucket, and which slot in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotLocation {
    /// Position of the bucket in the arena's bucket sequence.
    pub bucket: usize,
    /// Slot offset within that bucket.
    pub offset: usize,
}

/// Shift/mask pair for power-of-two bucket capacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FastPath {
    shift: u32,
    mask: usize,
}

/// Index decomposition rules for a fixed bucket capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BucketLayout {
    capacity: usize,
    fast: Option<FastPath>,
}

impl BucketLayout {
    /// Build the layout for `capacity` slots per bucket.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Callers normalise through
    /// [`ArenaConfig::effective_bucket_capacity`](crate::ArenaConfig::effective_bucket_capacity).
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "bucket capacity must be non-zero");
        let fast = capacity.is_power_of_two().then(|| FastPath {
            shift: capacity.trailing_zeros(),
            mask: capacity - 1,
        });
        Self { capacity, fast }
    }

    /// Slots per bucket.
    #[inline]
    pub fn bucket_capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the shift/mask fast path is in use.
    #[inline]
    pub fn is_power_of_two(&self) -> bool {
        self.fast.is_some()
    }

    /// Map a logical index to its bucket and offset.
    #[inline]
    pub fn locate(&self, index: usize) -> SlotLocation {
        match self.fast {
            Some(FastPath { shift, mask }) => SlotLocation {
                bucket: index >> shift,
                offset: index & mask,
            },
            None => self.locate_by_division(index),
        }
    }

    /// Map a logical index using integer division only.
    #[inline]
    pub fn locate_by_division(&self, index: usize) -> SlotLocation {
        SlotLocation {
            bucket: index / self.capacity,
            offset: index % self.capacity,
        }
    }

    /// Minimum number of buckets needed to hold `len` elements.
    #[inline]
    pub fn buckets_for(&self, len: usize) -> usize {
        len.div_ceil(self.capacity)
    }
}
