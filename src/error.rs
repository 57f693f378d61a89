//! Error types for distance computations.

use thiserror::Error;

/// Errors raised at the boundary of every public distance operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// The input cannot be processed (too few rows, empty vectors,
    /// reference index out of range, cache too large to allocate).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rows, vectors or paired series disagree in length.
    #[error("Shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
}

impl DistanceError {
    pub(crate) fn shape(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Whether this is an [`DistanceError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Whether this is a [`DistanceError::ShapeMismatch`].
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}

/// Result type for distance operations.
pub type Result<T> = std::result::Result<T, DistanceError>;
