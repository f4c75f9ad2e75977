//! Budget service for variance calculation.

use std::collections::HashMap;

use budgetscope_shared::types::CentreId;
use rust_decimal::Decimal;

use super::types::{BudgetVarianceRow, GlobalVariance, Interpretation, VarianceResult};
use crate::aggregation::AggregationService;
use crate::records::{Budget, Centre, CentreDirectory, Expense, Monetary, Quarter};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Calculate variance between budgeted and actual amounts.
    ///
    /// variance = actual - budgeted, so a positive variance is an overrun.
    /// The rate is `variance / budgeted * 100` and is zero when nothing was
    /// budgeted; the interpretation follows the rate's sign. A rate too large
    /// for a `Decimal` saturates at `Decimal::MAX` or `Decimal::MIN`.
    #[must_use]
    pub fn variance(budgeted: Decimal, actual: Decimal) -> VarianceResult {
        let variance = actual.saturating_sub(budgeted);

        let variance_rate = if budgeted.is_zero() {
            Decimal::ZERO
        } else {
            variance
                .checked_div(budgeted)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map_or_else(
                    || {
                        if variance.is_sign_negative() == budgeted.is_sign_negative() {
                            Decimal::MAX
                        } else {
                            Decimal::MIN
                        }
                    },
                    |rate| rate.normalize(),
                )
        };

        VarianceResult {
            budgeted,
            actual,
            variance,
            variance_rate,
            interpretation: Interpretation::from_rate(variance_rate),
        }
    }

    /// Sum of the expenses booked against `budget`: same centre, same year
    /// and same quarter of the expense date.
    #[must_use]
    pub fn actual_for_budget<'a>(
        budget: &Budget,
        expenses: impl IntoIterator<Item = &'a Expense>,
    ) -> Decimal {
        AggregationService::total_amount(expenses.into_iter().filter(|e| {
            e.centre_id == budget.centre_id
                && e.year() == budget.year
                && e.quarter() == budget.quarter
        }))
    }

    /// Variance of a single budget against `expenses`.
    ///
    /// `expenses` should be the full collection: the actual amount depends
    /// on the budget's own centre and period, not on any active selection.
    #[must_use]
    pub fn calculate_variance<'a>(
        budget: &Budget,
        expenses: impl IntoIterator<Item = &'a Expense>,
    ) -> VarianceResult {
        let actual = Self::actual_for_budget(budget, expenses);
        Self::variance(budget.amount_value(), actual)
    }

    /// One variance row per budget, in budget order.
    #[must_use]
    pub fn variance_table<'a>(
        budgets: impl IntoIterator<Item = &'a Budget>,
        expenses: &[Expense],
        centres: &[Centre],
    ) -> Vec<BudgetVarianceRow> {
        let directory = CentreDirectory::new(centres);

        let mut actuals: HashMap<(&CentreId, i32, Quarter), Decimal> = HashMap::new();
        for expense in expenses {
            let actual = actuals
                .entry((&expense.centre_id, expense.year(), expense.quarter()))
                .or_default();
            *actual = actual.saturating_add(expense.amount_value());
        }

        budgets
            .into_iter()
            .map(|budget| {
                let actual = actuals
                    .get(&(&budget.centre_id, budget.year, budget.quarter))
                    .copied()
                    .unwrap_or_default();

                BudgetVarianceRow {
                    budget_id: budget.id.clone(),
                    centre_id: budget.centre_id.clone(),
                    centre_name: directory.display_name(&budget.centre_id).to_string(),
                    quarter: budget.quarter,
                    year: budget.year,
                    result: Self::variance(budget.amount_value(), actual),
                }
            })
            .collect()
    }

    /// Headline totals over already-filtered expenses and budgets.
    #[must_use]
    pub fn global<'a, 'b>(
        expenses: impl IntoIterator<Item = &'a Expense>,
        budgets: impl IntoIterator<Item = &'b Budget>,
    ) -> GlobalVariance {
        let summary = AggregationService::expense_summary(expenses);

        let (budget_count, global_budget) = budgets
            .into_iter()
            .fold((0usize, Decimal::ZERO), |(count, total), b| {
                (count + 1, total.saturating_add(b.amount_value()))
            });

        let average_budget_per_quarter = if budget_count == 0 {
            Decimal::ZERO
        } else {
            global_budget / Decimal::from(budget_count)
        };

        GlobalVariance {
            global_actual: summary.total,
            global_budget,
            global_variance: summary.total.saturating_sub(global_budget),
            expense_count: summary.count,
            budget_count,
            average_budget_per_quarter,
        }
    }
}
