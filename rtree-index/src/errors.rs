//! Error and result types for R-Tree operations.

use thiserror::Error;

/// Errors that can occur while building, mutating or querying an R-Tree.
///
/// Deleting an object that is not stored in the tree is not an error; it is
/// reported through the `bool`/`Option` result of the deletion call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RTreeError {
    #[error("Dimension mismatch: expected {expected} dimensions, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid rectangle: {0}")]
    InvalidRect(String),
}

impl RTreeError {
    /// Returns an error unless `actual` equals `expected`.
    pub(crate) fn check_dimensions(expected: usize, actual: usize) -> RTreeResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(RTreeError::DimensionMismatch { expected, actual })
        }
    }
}

/// Result type for R-Tree operations
pub type RTreeResult<T> = Result<T, RTreeError>;
