//! Variance data types.

use std::fmt;

use budgetscope_shared::types::{BudgetId, CentreId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::Quarter;

/// Reading of a variance rate.
///
/// Spending above budget is an overrun ("surcoût"), below budget a saving
/// ("économie").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interpretation {
    /// Actual spending exceeds the budget.
    #[serde(rename = "surcoût")]
    Surcout,
    /// Actual spending is below the budget.
    #[serde(rename = "économie")]
    Economie,
    /// Rate is exactly zero, including every zero budget.
    #[serde(rename = "neutre")]
    Neutre,
}

impl Interpretation {
    /// Classifies a variance rate by its sign.
    #[must_use]
    pub fn from_rate(rate: Decimal) -> Self {
        match rate.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Self::Surcout,
            std::cmp::Ordering::Less => Self::Economie,
            std::cmp::Ordering::Equal => Self::Neutre,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Surcout => "surcoût",
            Self::Economie => "économie",
            Self::Neutre => "neutre",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Variance calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceResult {
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Variance amount (actual - budgeted).
    pub variance: Decimal,
    /// Variance as a percentage of the budget, unrounded. Zero for a zero budget.
    pub variance_rate: Decimal,
    /// Sign-based reading of the rate.
    pub interpretation: Interpretation,
}

/// One line of the budget comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetVarianceRow {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Centre ID.
    pub centre_id: CentreId,
    /// Resolved centre name ("N/A" for orphans).
    pub centre_name: String,
    /// Budget quarter.
    pub quarter: Quarter,
    /// Budget year.
    pub year: i32,
    /// Variance figures.
    #[serde(flatten)]
    pub result: VarianceResult,
}

/// Headline figures over the currently selected expenses and budgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalVariance {
    /// Total of the selected expenses.
    pub global_actual: Decimal,
    /// Total of the selected budgets.
    pub global_budget: Decimal,
    /// `global_actual - global_budget`.
    pub global_variance: Decimal,
    /// Number of selected expenses.
    pub expense_count: usize,
    /// Number of selected budgets.
    pub budget_count: usize,
    /// Mean budget amount, zero when no budget is selected.
    pub average_budget_per_quarter: Decimal,
}
