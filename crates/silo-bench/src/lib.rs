//! Benchmark workloads for the Silo storage crates.
//!
//! Provides the element type and pre-filled arenas shared by the criterion
//! benches:
//!
//! - [`BenchElem`]: a 48-byte-plus-heap element, typical of record storage
//! - [`filled_arena`]: an arena holding `count` elements
//! - [`probe_indices`]: deterministic random-access index stream

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use silo_arena::BucketArena;

/// Record-sized benchmark element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchElem {
    /// Heap-allocated label.
    pub s: String,
    /// Inline payload.
    pub a: i64,
    /// Inline payload.
    pub b: i64,
    /// Inline payload.
    pub c: i64,
    /// Inline payload.
    pub d: i64,
    /// Sequence number.
    pub n: usize,
}

impl BenchElem {
    /// Element tagged with sequence number `n` and no heap label.
    pub fn numbered(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }
}

/// Build an arena of `count` numbered elements.
pub fn filled_arena(bucket_capacity: usize, count: usize) -> BucketArena<BenchElem> {
    let mut arena = BucketArena::with_bucket_capacity(bucket_capacity);
    arena.extend((0..count).map(BenchElem::numbered));
    arena
}

/// Deterministic random indices into an arena of `len` elements.
pub fn probe_indices(seed: u64, count: usize, len: usize) -> Vec<usize> {
    silo_test_utils::index_sequence(seed, count, len)
}
