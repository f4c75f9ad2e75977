//! Property-based tests for budget module.

use budgetscope_shared::types::{Amount, BudgetId, CentreId, ExpenseId};
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::BudgetService;
use super::types::Interpretation;
use crate::aggregation::AggregationService;
use crate::records::{Budget, Expense, Quarter};

fn expense_strategy() -> impl Strategy<Value = Expense> {
    (0usize..3, 0u64..(3 * 365), 0i64..1_000_000).prop_map(|(centre, offset, cents)| Expense {
        id: ExpenseId::generate(),
        centre_id: CentreId::new(format!("c{centre}")),
        amount: Amount::new(Decimal::new(cents, 2)),
        description: String::new(),
        date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap() + chrono::Days::new(offset),
        created_by: None,
    })
}

fn budget_strategy() -> impl Strategy<Value = Budget> {
    (0usize..3, 1u8..=4, 2022i32..2025, 0i64..1_000_000).prop_map(
        |(centre, quarter, year, cents)| Budget {
            id: BudgetId::generate(),
            centre_id: CentreId::new(format!("c{centre}")),
            quarter: Quarter::new(quarter).unwrap(),
            year,
            amount: Amount::new(Decimal::new(cents, 2)),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// variance = actual - budgeted, and the interpretation follows its sign
    /// whenever something was budgeted.
    #[test]
    fn prop_variance_sign(
        budgeted in 0i64..1_000_000_000,
        actual in 0i64..1_000_000_000,
    ) {
        let budgeted = Decimal::from(budgeted);
        let actual = Decimal::from(actual);

        let result = BudgetService::variance(budgeted, actual);

        prop_assert_eq!(result.variance, actual - budgeted);

        let expected = if budgeted.is_zero() || actual == budgeted {
            Interpretation::Neutre
        } else if actual > budgeted {
            Interpretation::Surcout
        } else {
            Interpretation::Economie
        };
        prop_assert_eq!(result.interpretation, expected);
    }

    /// A zero budget always yields a zero rate.
    #[test]
    fn prop_zero_budget_rate(actual in 0i64..1_000_000_000) {
        let result = BudgetService::variance(Decimal::ZERO, Decimal::from(actual));

        prop_assert_eq!(result.variance_rate, Decimal::ZERO);
        prop_assert_eq!(result.interpretation, Interpretation::Neutre);
    }

    /// The table's actual amounts agree with the per-budget calculation.
    #[test]
    fn prop_table_matches_single_budget(
        expenses in prop::collection::vec(expense_strategy(), 0..60),
        budgets in prop::collection::vec(budget_strategy(), 0..12),
    ) {
        let rows = BudgetService::variance_table(&budgets, &expenses, &[]);

        prop_assert_eq!(rows.len(), budgets.len());
        for (row, budget) in rows.iter().zip(&budgets) {
            prop_assert_eq!(row.result, BudgetService::calculate_variance(budget, &expenses));
        }
    }

    /// Global actual and budget are plain totals of the inputs.
    #[test]
    fn prop_global_totals(
        expenses in prop::collection::vec(expense_strategy(), 0..60),
        budgets in prop::collection::vec(budget_strategy(), 0..12),
    ) {
        let global = BudgetService::global(&expenses, &budgets);

        prop_assert_eq!(global.global_actual, AggregationService::total_amount(&expenses));
        prop_assert_eq!(global.global_budget, AggregationService::total_amount(&budgets));
        prop_assert_eq!(global.global_variance, global.global_actual - global.global_budget);
        prop_assert_eq!(global.budget_count, budgets.len());
    }
}
