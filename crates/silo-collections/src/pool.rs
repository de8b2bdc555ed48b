//! Reusable-slot object pool.
//!
//! [`ObjectPool`] hands out slots from a [`BucketArena`] one at a time and
//! takes them all back at once with [`clear`](ObjectPool::clear). Slots
//! created in earlier cycles are reused in the same order, so once a cycle
//! has reached a given size, later cycles of that size allocate nothing.

use silo_arena::{ArenaConfig, BucketArena};

/// Pool of reusable `T` slots, recycled wholesale between cycles.
///
/// A *cycle* is the span between two [`clear`](Self::clear) calls. Within a
/// cycle every [`acquire`](Self::acquire) returns a distinct slot; after a
/// clear, the n-th acquire returns the same slot (same address) as the n-th
/// acquire of the previous cycle.
///
/// Reused slots are not reset: they hold whatever the previous cycle left
/// in them. Callers overwrite what they need.
pub struct ObjectPool<T> {
    slots: BucketArena<T>,
    /// Slots reserved in the current cycle.
    in_use: usize,
}

impl<T> ObjectPool<T> {
    /// Create an empty pool with the default bucket capacity.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty pool whose backing arena uses `bucket_capacity`.
    pub fn with_bucket_capacity(bucket_capacity: usize) -> Self {
        Self::with_config(ArenaConfig::new(bucket_capacity))
    }

    /// Create an empty pool from an arena config.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            slots: BucketArena::with_config(config),
            in_use: 0,
        }
    }

    /// Slots handed out since the last clear.
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// Slots ever created and still retained.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Memory held by the backing arena in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.memory_bytes()
    }

    /// The `index`-th slot acquired in this cycle.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.in_use {
            return None;
        }
        self.slots.get(index)
    }

    /// Mutable access to the `index`-th slot acquired in this cycle.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.in_use {
            return None;
        }
        self.slots.get_mut(index)
    }

    /// Iterate the slots acquired in this cycle, in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().take(self.in_use)
    }

    /// Release every reservation. The next acquire starts from the first slot.
    pub fn clear(&mut self) {
        tracing::trace!(released = self.in_use, "cleared object pool");
        self.in_use = 0;
    }
}

impl<T: Default> ObjectPool<T> {
    /// Reserve the next slot for this cycle.
    ///
    /// Reuses a slot from an earlier cycle when one is available; otherwise
    /// creates a default slot, growing the backing arena by at most one
    /// bucket.
    pub fn acquire(&mut self) -> &mut T {
        let index = self.in_use;
        self.in_use += 1;
        if index < self.slots.len() {
            &mut self.slots[index]
        } else {
            self.slots.push(T::default())
        }
    }

    /// Drop slots beyond the current reservation and release spare buckets.
    pub fn shrink(&mut self) {
        let before = self.slots.len();
        while self.slots.len() > self.in_use && self.slots.pop().is_ok() {}
        self.slots.prune();
        tracing::debug!(
            released = before - self.slots.len(),
            retained = self.slots.len(),
            "shrank object pool"
        );
    }
}

impl<T> Default for ObjectPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
