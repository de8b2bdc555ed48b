//! Collections built on the Silo bucketed arena.
//!
//! - [`ObjectPool`]: hands out reusable slots and recycles them all at once
//!   on [`clear`](ObjectPool::clear). Repeated cycles of the same size do
//!   not allocate.
//! - [`SparseSet`]: integer-keyed map with O(1) set/get/delete and dense
//!   iteration, using paged sparse lookup and swap-delete dense storage.
//!
//! Both inherit the arena's address stability: growing never moves stored
//! values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pool;
pub mod sparse;

pub use pool::ObjectPool;
pub use sparse::{SparseKey, SparseSet};
