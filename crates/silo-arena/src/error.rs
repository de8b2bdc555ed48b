//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors returned by removal-class arena operations.
///
/// Both variants indicate a caller bug rather than a transient condition;
/// retrying the same call cannot succeed. The arena is left untouched
/// whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// `delete` was called with an index at or past the live length.
    OutOfBounds {
        /// The rejected logical index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// `pop` was called on an arena with no live elements.
    Empty,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index out of bounds: index {index}, len {len}")
            }
            Self::Empty => write!(f, "arena is empty"),
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_index_and_len() {
        let err = ArenaError::OutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index out of bounds: index 7, len 3");
    }

    #[test]
    fn empty_display() {
        assert_eq!(ArenaError::Empty.to_string(), "arena is empty");
    }
}
