//! Prediction error types.

use budgetscope_shared::AppError;
use thiserror::Error;

/// Errors reported by an expense predictor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictionError {
    /// The prediction service could not be reached.
    #[error("Prediction service unavailable: {0}")]
    Unavailable(String),

    /// The prediction service answered with something unusable.
    #[error("Invalid prediction response: {0}")]
    InvalidResponse(String),
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        Self::ExternalService(err.to_string())
    }
}
