//! Bucketed, address-stable element storage.
//!
//! [`BucketArena`] grows by appending fixed-size buckets instead of
//! reallocating one contiguous buffer, so pushing never moves elements that
//! are already stored. Removal is O(1) swap-with-last.
//!
//! # Architecture
//!
//! ```text
//! BucketArena<T>
//! ├── BucketLayout (index → (bucket, offset); shift/mask when capacity is 2^k)
//! └── Vec<Bucket<T>>
//!     └── Box<[T]> (bucket_capacity default-initialised slots, never resized)
//! ```
//!
//! # Removal contract
//!
//! - `delete(k)` moves the element at `len - 1` into `k`. Order is not
//!   preserved. Batch deletions must walk indices from high to low.
//! - Every vacated slot is reset to `T::default()` so removed payloads are
//!   dropped immediately.
//! - `delete` and `pop` report misuse through [`ArenaError`] and leave the
//!   arena unchanged.
//! - Buckets are only released by an explicit [`BucketArena::prune`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod bucket;
pub mod config;
pub mod error;
pub mod layout;

// Public re-exports for the primary API surface.
pub use arena::{BucketArena, Iter, IterMut};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use layout::{BucketLayout, SlotLocation};
