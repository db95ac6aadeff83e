//! Error types for observation arrays.

use obskit_core::Shape;
use std::fmt;

/// Errors arising from observation array construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The storage length does not match the shape's element count.
    ShapeMismatch {
        /// Element count implied by the shape.
        expected: usize,
        /// Length of the supplied storage.
        actual: usize,
    },
    /// The shape's element count does not fit in `usize`.
    CountOverflow {
        /// The offending shape.
        shape: Shape,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "shape holds {expected} elements, storage has {actual}")
            }
            Self::CountOverflow { shape } => {
                write!(f, "element count of shape {shape:?} overflows usize")
            }
        }
    }
}

impl std::error::Error for ArrayError {}
