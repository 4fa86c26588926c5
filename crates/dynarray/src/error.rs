//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during checked container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A checked access with an index at or beyond the live length.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The live length of the array at the time of the access.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for ArrayError {}
