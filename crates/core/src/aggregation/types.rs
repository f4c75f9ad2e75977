//! Aggregation output types.

use std::collections::BTreeMap;

use budgetscope_shared::types::{CentreId, ExpenseId, saturating_sum};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chart colours, assigned to centres by cycling in centre-list order.
pub const PALETTE: [&str; 12] = [
    "#42A5F5", "#66BB6A", "#FFA726", "#EF5350", "#AB47BC", "#7E57C2", "#26A69A", "#FFCA28",
    "#5C6BC0", "#29B6F6", "#FFEE58", "#FF7043",
];

/// Colour for the centre at `index` in the centre list.
#[must_use]
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Expense total for one centre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentreTotal {
    /// Centre ID.
    pub centre_id: CentreId,
    /// Centre display name.
    pub name: String,
    /// Sum of the centre's expenses.
    pub total: Decimal,
    /// Number of expenses summed.
    pub count: usize,
    /// Chart colour.
    pub color: String,
}

/// Centre totals sorted by total, descending.
///
/// Only [`AggregationService::rank_descending`](super::AggregationService::rank_descending)
/// builds this type, so every top-N view is a prefix of one ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedTotals(pub(super) Vec<CentreTotal>);

impl RankedTotals {
    /// The full ranking.
    #[must_use]
    pub fn as_slice(&self) -> &[CentreTotal] {
        &self.0
    }

    /// The first `n` entries (fewer if the ranking is shorter).
    #[must_use]
    pub fn top(&self, n: usize) -> &[CentreTotal] {
        &self.0[..n.min(self.0.len())]
    }

    /// Number of ranked centres.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no centre has a positive total.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all ranked totals.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        saturating_sum(self.0.iter().map(|t| t.total))
    }
}

/// Centre display name → year → budgeted amount.
pub type AnnualTotals = BTreeMap<String, BTreeMap<i32, Decimal>>;

/// An expense row for the "recent expenses" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentExpense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Description.
    pub description: String,
    /// Centre ID.
    pub centre_id: CentreId,
    /// Resolved centre name ("N/A" for orphans).
    pub centre_name: String,
    /// Amount (zero when malformed).
    pub amount: Decimal,
    /// Expense date.
    pub date: NaiveDate,
}

/// Count, total and average of a set of expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Number of expenses.
    pub count: usize,
    /// Sum of amounts.
    pub total: Decimal,
    /// Average amount, rounded to 2 decimals; zero when empty.
    pub average: Decimal,
}
