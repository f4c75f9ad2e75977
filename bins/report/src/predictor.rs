//! Predictor backed by precomputed snapshot entries.

use std::collections::HashMap;

use budgetscope_core::prediction::{
    ExpensePredictor, Prediction, PredictionError, PredictionRequest,
};

use crate::snapshot::StoredPrediction;

const NO_HISTORY: &str = "No historical data for prediction";

/// Answers prediction requests from a fixed table.
#[derive(Debug, Clone, Default)]
pub struct SnapshotPredictor {
    entries: HashMap<PredictionRequest, Prediction>,
}

impl SnapshotPredictor {
    /// Builds the table. Later entries for the same request win.
    pub fn new(stored: impl IntoIterator<Item = StoredPrediction>) -> Self {
        Self {
            entries: stored
                .into_iter()
                .map(|s| (s.request, s.prediction))
                .collect(),
        }
    }

    /// Number of known predictions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no prediction is known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExpensePredictor for SnapshotPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictionError> {
        Ok(self
            .entries
            .get(request)
            .cloned()
            .unwrap_or_else(|| Prediction::unavailable(NO_HISTORY)))
    }
}
