//! Error types for resizable array operations.

use std::error::Error;
use std::fmt;

/// Errors returned by fallible [`ResizableArray`](crate::ResizableArray) operations.
///
/// Every operation checks its precondition before touching the buffer, so
/// receiving one of these means the array is exactly as it was before the
/// call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index argument fell outside the range the operation accepts.
    ///
    /// `at`, `at_mut` and `delete` accept `0..len`; `insert` accepts `0..=len`.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// `pop` was called on an empty array.
    Underflow,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Underflow => write!(f, "cannot pop from an empty array"),
        }
    }
}

impl Error for ArrayError {}
