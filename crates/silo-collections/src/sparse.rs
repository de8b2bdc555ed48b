//! Integer-keyed sparse set.
//!
//! [`SparseSet`] maps integer keys to values with O(1) `set`, `get` and
//! `delete`. Keys index a paged sparse table; each page is a bucket of
//! dense positions, allocated on first use and decomposed with the same
//! [`BucketLayout`] as the arena. Pages are looked up by page number, so
//! memory follows the pages touched rather than the largest key. Keys and values live in two parallel
//! [`BucketArena`]s, so iteration touches only live entries.
//!
//! Deletion swap-removes from the dense arenas and rewires the sparse entry
//! of the key that moved. Iteration order is insertion order until the first
//! delete and unspecified afterwards.

use std::collections::HashMap;

use silo_arena::{ArenaConfig, BucketArena, BucketLayout};

/// Sparse-table marker for "no dense entry".
const VACANT: usize = usize::MAX;

/// Keys usable in a [`SparseSet`].
///
/// Distinct keys must map to distinct sparse indices. Clustered keys (ids,
/// handles, counters) share pages and keep the table small.
pub trait SparseKey: Copy + Default {
    /// Position of this key in the sparse table. Must be injective.
    fn sparse_index(self) -> usize;
}

macro_rules! impl_sparse_key {
    ($($ty:ty),*) => {
        $(
            impl SparseKey for $ty {
                #[inline]
                fn sparse_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_sparse_key!(u8, u16, u32, usize);

// Narrower pointers would fold distinct keys onto one index.
#[cfg(target_pointer_width = "64")]
impl_sparse_key!(u64);

/// Map from integer keys to values with dense, swap-delete storage.
pub struct SparseSet<K, V> {
    layout: BucketLayout,
    /// Sparse table pages by page number: offset → dense position,
    /// `VACANT` when absent.
    pages: HashMap<usize, Box<[usize]>>,
    keys: BucketArena<K>,
    values: BucketArena<V>,
}

impl<K: SparseKey, V> SparseSet<K, V> {
    /// Create an empty set with the default page and bucket capacity.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty set from an arena config.
    ///
    /// The bucket capacity is used both for sparse pages and dense buckets.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            layout: BucketLayout::new(config.effective_bucket_capacity()),
            pages: HashMap::new(),
            keys: BucketArena::with_config(config),
            values: BucketArena::with_config(config),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `key` has a value.
    pub fn contains_key(&self, key: K) -> bool {
        self.dense_index(key).is_some()
    }

    /// Value stored under `key`.
    pub fn get(&self, key: K) -> Option<&V> {
        let dense = self.dense_index(key)?;
        self.values.get(dense)
    }

    /// Mutable value stored under `key`.
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let dense = self.dense_index(key)?;
        self.values.get_mut(dense)
    }

    /// Iterate `(key, &value)` pairs in dense order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.keys.iter().copied().zip(self.values.iter())
    }

    /// Iterate `(key, &mut value)` pairs in dense order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut V)> + '_ {
        self.keys.iter().copied().zip(self.values.iter_mut())
    }

    /// Visit entries in dense order until `f` returns `false`.
    ///
    /// Returns `true` when every entry was visited.
    pub fn for_each_until<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(K, &mut V) -> bool,
    {
        self.iter_mut().all(|(key, value)| f(key, value))
    }

    /// Number of sparse pages currently allocated.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn dense_index(&self, key: K) -> Option<usize> {
        let loc = self.layout.locate(key.sparse_index());
        let dense = self.pages.get(&loc.bucket)?[loc.offset];
        (dense != VACANT).then_some(dense)
    }

    fn set_dense(&mut self, key: K, dense: usize) {
        let loc = self.layout.locate(key.sparse_index());
        let capacity = self.layout.bucket_capacity();
        let page = self
            .pages
            .entry(loc.bucket)
            .or_insert_with(|| vec![VACANT; capacity].into_boxed_slice());
        page[loc.offset] = dense;
    }
}

impl<K: SparseKey, V: Default> SparseSet<K, V> {
    /// Store `value` under `key`, returning the value it replaced.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(dense) = self.dense_index(key) {
            return self
                .values
                .get_mut(dense)
                .map(|slot| std::mem::replace(slot, value));
        }
        let dense = self.values.len();
        self.keys.push(key);
        self.values.push(value);
        self.set_dense(key, dense);
        None
    }

    /// Remove `key`, returning its value.
    ///
    /// The entry at the end of the dense arenas moves into the freed
    /// position.
    pub fn delete(&mut self, key: K) -> Option<V> {
        let dense = self.dense_index(key)?;
        debug_assert_eq!(self.keys.len(), self.values.len());
        let value = match (self.values.delete(dense), self.keys.delete(dense)) {
            (Ok(value), Ok(_)) => value,
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(%err, dense, "sparse entry points past dense storage");
                return None;
            }
        };
        self.set_dense(key, VACANT);
        if let Some(&moved) = self.keys.get(dense) {
            self.set_dense(moved, dense);
        }
        Some(value)
    }

    /// Release dense buckets past the live entries and sparse pages with no
    /// live keys.
    pub fn prune(&mut self) {
        self.keys.prune();
        self.values.prune();
        let before = self.page_count();
        self.pages
            .retain(|_, slots| slots.iter().any(|&dense| dense != VACANT));
        self.pages.shrink_to_fit();
        tracing::debug!(
            released_pages = before - self.page_count(),
            len = self.len(),
            "pruned sparse set"
        );
    }
}

impl<K: SparseKey, V> Default for SparseSet<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
