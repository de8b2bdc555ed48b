//! Arena configuration parameters.

/// Configuration for a [`BucketArena`](crate::BucketArena).
///
/// Controls bucket sizing. Normalised at construction; the resulting bucket
/// capacity is immutable for the lifetime of the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of element slots in each bucket.
    ///
    /// Default: 1024. A value of zero is replaced by the default. Powers of
    /// two enable shift/mask index decomposition instead of division.
    pub bucket_capacity: usize,
}

impl ArenaConfig {
    /// Default number of slots per bucket.
    pub const DEFAULT_BUCKET_CAPACITY: usize = 1024;

    /// Create a config with the given bucket capacity.
    pub const fn new(bucket_capacity: usize) -> Self {
        Self { bucket_capacity }
    }

    /// The bucket capacity the arena will actually use.
    ///
    /// Zero is substituted with [`DEFAULT_BUCKET_CAPACITY`](Self::DEFAULT_BUCKET_CAPACITY).
    pub const fn effective_bucket_capacity(&self) -> usize {
        if self.bucket_capacity == 0 {
            Self::DEFAULT_BUCKET_CAPACITY
        } else {
            self.bucket_capacity
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUCKET_CAPACITY)
    }
}
