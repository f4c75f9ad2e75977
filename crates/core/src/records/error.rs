//! Record and record-source error types.

use budgetscope_shared::AppError;
use thiserror::Error;

/// Errors raised while building records or fetching them from a source.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Quarter number outside 1..=4.
    #[error("Quarter must be between 1 and 4, got {0}")]
    InvalidQuarter(i64),

    /// Quarter text that is not a number.
    #[error("Quarter is not a number: {0:?}")]
    UnparsableQuarter(String),

    /// The record source could not be reached or read.
    #[error("Record source unavailable: {0}")]
    SourceUnavailable(String),

    /// The record source delivered a collection that could not be decoded.
    #[error("Malformed {collection} collection: {reason}")]
    Malformed {
        /// Collection name (e.g. "expenses").
        collection: &'static str,
        /// Decoder message.
        reason: String,
    },
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::InvalidQuarter(_) | RecordError::UnparsableQuarter(_) => {
                Self::Validation(err.to_string())
            }
            RecordError::SourceUnavailable(_) | RecordError::Malformed { .. } => {
                Self::Source(err.to_string())
            }
        }
    }
}
