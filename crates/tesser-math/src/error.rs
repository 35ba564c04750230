//! Error types for vector operations.

use std::fmt;

/// Errors that can occur while addressing, marshalling or parsing vectors.
///
/// Vector arithmetic itself is total: division by zero and similar edge cases
/// propagate through IEEE-754 `Inf`/`NaN` instead of raising an error.
#[derive(Debug)]
pub enum VectorError {
    /// A component index outside `0..=3` was used.
    InvalidComponent {
        /// The rejected index.
        index: usize,
    },

    /// A buffer access fell outside the buffer's storage.
    BufferOverflow {
        /// Start of the access, in the buffer's own unit.
        index: usize,
        /// Number of units the access needed.
        len: usize,
        /// Number of units the buffer holds.
        capacity: usize,
    },

    /// Text did not match the `(x y z w)` form.
    Parse {
        /// The offending input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Reading or writing a binary record failed.
    Io(std::io::Error),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidComponent { index } => {
                write!(f, "Invalid vector component index: {} (expected 0..=3)", index)
            }
            VectorError::BufferOverflow {
                index,
                len,
                capacity,
            } => write!(
                f,
                "Buffer access out of range: {}..{} (capacity: {})",
                index,
                index.saturating_add(*len),
                capacity
            ),
            VectorError::Parse { input, reason } => {
                write!(f, "Failed to parse vector '{}': {}", input, reason)
            }
            VectorError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VectorError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VectorError {
    fn from(err: std::io::Error) -> Self {
        VectorError::Io(err)
    }
}

/// Result type alias for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;
