//! Silo: bucketed element storage with stable addresses.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Silo sub-crates. For most users, adding `silo` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silo::prelude::*;
//!
//! // Four slots per bucket: indices decompose with shift/mask.
//! let mut arena = BucketArena::with_bucket_capacity(4);
//! for s in ["a", "b", "c", "d", "e"] {
//!     arena.push(s.to_string());
//! }
//! assert_eq!(arena.bucket_count(), 2);
//!
//! // Swap-delete: the last element moves into the hole.
//! assert_eq!(arena.delete(1).unwrap(), "b");
//! assert_eq!(arena.get(1).map(String::as_str), Some("e"));
//! assert_eq!(arena.pop().unwrap(), "d");
//! assert_eq!(arena.len(), 3);
//!
//! // Misuse is reported, not fatal.
//! assert_eq!(
//!     arena.delete(10),
//!     Err(ArenaError::OutOfBounds { index: 10, len: 3 })
//! );
//!
//! let mut ids: SparseSet<u32, &str> = SparseSet::new();
//! ids.set(42, "answer");
//! assert_eq!(ids.get(42), Some(&"answer"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `silo-arena` | `BucketArena`, bucket layout, config, errors |
//! | [`collections`] | `silo-collections` | `ObjectPool`, `SparseSet` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bucketed arena storage (`silo-arena`).
///
/// [`arena::BucketArena`] is the core type; [`arena::BucketLayout`] exposes
/// the index decomposition it uses.
pub use silo_arena as arena;

/// Collections built on the arena (`silo-collections`).
///
/// [`collections::ObjectPool`] for cycle-based slot reuse and
/// [`collections::SparseSet`] for integer-keyed lookup.
pub use silo_collections as collections;

/// Common imports for typical Silo usage.
///
/// ```rust
/// use silo::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use silo_arena::{ArenaConfig, ArenaError, BucketArena};

    // Collections
    pub use silo_collections::{ObjectPool, SparseKey, SparseSet};
}
