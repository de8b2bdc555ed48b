//! Reusable element types and workload generators.
//!
//! - [`Payload`]: a mixed heap/inline element, cheap to build from an index.
//! - [`index_sequence`]: deterministic pseudo-random index streams.

/// Element with both an inline integer and a heap-allocated string.
///
/// `Payload::from_index(n)` is unique per `n`, which makes it convenient for
/// checking that every slot holds the value it was given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Payload {
    pub id: u64,
    pub label: String,
}

impl Payload {
    pub fn from_index(n: usize) -> Self {
        Self {
            id: n as u64,
            label: n.to_string(),
        }
    }

    /// Whether this payload holds the default (cleared) value.
    pub fn is_cleared(&self) -> bool {
        self.id == 0 && self.label.is_empty()
    }
}

/// Generate `count` indices in `[0, bound)` from `seed`.
///
/// Uses a 64-bit LCG so the same seed always produces the same stream.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn index_sequence(seed: u64, count: usize, bound: usize) -> Vec<usize> {
    assert!(bound > 0, "bound must be non-zero");
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % bound as u64) as usize
        })
        .collect()
}
