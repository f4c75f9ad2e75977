//! Dashboard data types.

use budgetscope_shared::types::CentreId;
use serde::{Deserialize, Serialize};

use crate::aggregation::{
    AnnualTotals, CentreTotal, DEFAULT_RECENT_COUNT, DEFAULT_TOP_N, RankedTotals, RecentExpense,
};
use crate::budget::GlobalVariance;
use crate::filter::{Scope, Selection};
use crate::prediction::Prediction;
use crate::trend::{TrendBucket, TrendRange, TrendWindow};

/// Dashboard controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardRequest {
    /// Global year / quarter / centre selection.
    pub selection: Selection,
    /// Trend window length.
    pub trend_range: TrendRange,
    /// Centre shown by the trend chart, independent of `selection`.
    pub trend_centre: Scope<CentreId>,
    /// Size of the concentrated (top centres) view.
    pub top_n: usize,
    /// Number of recent expenses listed.
    pub recent_count: usize,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self {
            selection: Selection::all(),
            trend_range: TrendRange::default(),
            trend_centre: Scope::All,
            top_n: DEFAULT_TOP_N,
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }
}

/// Dashboard metrics response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// Number of centres.
    pub centre_count: usize,
    /// Headline figures over the selected records.
    pub global: GlobalVariance,
    /// Expense totals of every centre, ranked.
    pub expenses_by_centre: RankedTotals,
    /// Leading prefix of `expenses_by_centre`.
    pub top_centres: Vec<CentreTotal>,
    /// Window the trend covers.
    pub trend_window: TrendWindow,
    /// Monthly spending, oldest first.
    pub trend: Vec<TrendBucket>,
    /// Latest expenses.
    pub recent_expenses: Vec<RecentExpense>,
    /// Budgeted amount per centre name and year.
    pub annual_budgets: AnnualTotals,
    /// Prediction attached by the host, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
}

impl DashboardMetrics {
    /// Attaches a prediction for display.
    #[must_use]
    pub fn with_prediction(mut self, prediction: Prediction) -> Self {
        self.prediction = Some(prediction);
        self
    }
}
