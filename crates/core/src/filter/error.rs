//! Filter error types.

use budgetscope_shared::AppError;
use thiserror::Error;

/// Errors raised while building a selection from control values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Year text is neither "all" nor an integer.
    #[error("Invalid year: {0:?}")]
    InvalidYear(String),

    /// Quarter text is neither "all" nor 1 to 4.
    #[error("Invalid quarter: {0:?}")]
    InvalidQuarter(String),
}

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        Self::Validation(err.to_string())
    }
}
