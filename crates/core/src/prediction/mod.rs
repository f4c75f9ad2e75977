//! Expense prediction seam.
//!
//! Predictions come from an external service. The engine only carries the
//! result to the dashboard; it never inspects or recomputes it.

pub mod error;
pub mod types;

pub use error::PredictionError;
pub use types::{Prediction, PredictionRequest};

/// Source of expense predictions.
pub trait ExpensePredictor {
    /// Predicts a centre's spending for a quarter.
    ///
    /// # Errors
    ///
    /// Returns `PredictionError` if the service fails. Lack of history is
    /// not an error: implementations answer with [`Prediction::unavailable`].
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictionError>;
}

impl<P: ExpensePredictor + ?Sized> ExpensePredictor for &P {
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictionError> {
        (**self).predict(request)
    }
}
