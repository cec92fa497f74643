//! Error types for the viewcull crates
//!
//! Errors are limited to input-shape validation at the host boundary.
//! The geometry routines themselves are infallible on well-formed input
//! and never log or swallow failures.

use std::fmt;

/// Result type for viewcull operations
pub type Result<T> = std::result::Result<T, Error>;

/// Viewcull errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input array does not have the length the operation requires
    ShapeMismatch {
        /// Which input was malformed (e.g. "extents", "transform")
        what: &'static str,
        /// Required number of elements
        expected: usize,
        /// Number of elements actually received
        actual: usize,
    },

    /// A flat batch array is not a sequence of 3-component points
    UnsupportedDimension {
        /// Which input was malformed
        what: &'static str,
        /// Number of elements actually received
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch { what, expected, actual } => {
                write!(f, "Shape mismatch: {} requires {} elements, got {}", what, expected, actual)
            }
            Error::UnsupportedDimension { what, len } => {
                write!(f, "Unsupported dimension: {} has {} elements, not a multiple of 3", what, len)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
