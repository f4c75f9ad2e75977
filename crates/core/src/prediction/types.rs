//! Prediction request and result types.

use budgetscope_shared::types::CentreId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::Quarter;

/// What to predict: one centre's spending for one quarter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Centre ID.
    pub centre_id: CentreId,
    /// Target quarter.
    #[serde(alias = "trimester")]
    pub quarter: Quarter,
    /// Target year.
    #[serde(alias = "annee")]
    pub year: i32,
}

/// A predicted amount with the model's quality score.
///
/// Values are passed through for display and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted total for the quarter.
    #[serde(alias = "prediction")]
    pub amount: Decimal,
    /// Model quality (R²).
    #[serde(default)]
    pub r2_score: Decimal,
    /// Explanation when no meaningful prediction could be made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Prediction {
    /// A zero prediction carrying an explanation.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            amount: Decimal::ZERO,
            r2_score: Decimal::ZERO,
            message: Some(message.into()),
        }
    }
}
