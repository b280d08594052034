//! Error type shared by the sequence types.

use thiserror::Error;

/// Errors raised by the partial sequence operations.
///
/// Lookups such as [`Seq::at`](crate::Seq::at) and
/// [`Seq::slice`](crate::Seq::slice) never fail; only searches and edits do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    #[error("Subsequence not found: {0}")]
    NotFound(String),

    #[error("Index out of bounds: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for sequence operations.
pub type SeqResult<T> = Result<T, SeqError>;
