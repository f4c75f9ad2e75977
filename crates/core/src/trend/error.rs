//! Trend error types.

use budgetscope_shared::AppError;
use thiserror::Error;

/// Errors raised while configuring a trend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendError {
    /// Range text other than "month", "quarter" or "year".
    #[error("Unknown trend range: {0:?} (expected month, quarter or year)")]
    UnknownRange(String),
}

impl From<TrendError> for AppError {
    fn from(err: TrendError) -> Self {
        Self::Validation(err.to_string())
    }
}
