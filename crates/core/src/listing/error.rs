//! Listing error types.

use budgetscope_shared::AppError;
use thiserror::Error;

/// Errors raised while building an expense query from control values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    /// Date bound is neither empty nor `YYYY-MM-DD`.
    #[error("Invalid date bound: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateBound(String),

    /// Sort order other than "asc" or "desc".
    #[error("Invalid sort order: {0:?}")]
    InvalidSortOrder(String),
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        Self::Validation(err.to_string())
    }
}
