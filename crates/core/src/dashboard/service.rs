//! Dashboard composition.

use chrono::NaiveDate;

use super::types::{DashboardMetrics, DashboardRequest};
use crate::aggregation::AggregationService;
use crate::budget::BudgetService;
use crate::records::Snapshot;
use crate::trend::TrendBucketer;

/// Composes the dashboard from a snapshot.
pub struct DashboardService;

impl DashboardService {
    /// Builds every dashboard figure for `request` as of `now`.
    ///
    /// Only the headline figures follow the global selection. The centre
    /// ranking, recent expenses and annual budgets cover all records, and the
    /// trend follows its own centre scope.
    #[must_use]
    pub fn build(snapshot: &Snapshot, request: &DashboardRequest, now: NaiveDate) -> DashboardMetrics {
        let selection = &request.selection;
        let global = BudgetService::global(
            snapshot.expenses.iter().filter(|e| selection.matches_expense(e)),
            snapshot.budgets.iter().filter(|b| selection.matches_budget(b)),
        );

        let expenses_by_centre = AggregationService::rank_descending(
            AggregationService::group_totals_by_centre(&snapshot.expenses, &snapshot.centres),
        );
        let top_centres = expenses_by_centre.top(request.top_n).to_vec();

        let trend_window = TrendBucketer::window(now, request.trend_range);
        let trend = TrendBucketer::buckets_for_window(
            &trend_window,
            snapshot
                .expenses
                .iter()
                .filter(|e| request.trend_centre.admits(&e.centre_id)),
        );

        DashboardMetrics {
            centre_count: snapshot.centres.len(),
            global,
            expenses_by_centre,
            top_centres,
            trend_window,
            trend,
            recent_expenses: AggregationService::recent_expenses(
                &snapshot.expenses,
                &snapshot.centres,
                request.recent_count,
            ),
            annual_budgets: AggregationService::annual_totals_by_centre_name(
                &snapshot.budgets,
                &snapshot.centres,
            ),
            prediction: None,
        }
    }
}
