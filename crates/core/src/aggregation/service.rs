//! Aggregation service: totals, per-centre grouping, ranking.

use std::collections::HashMap;

use budgetscope_shared::types::{CentreId, saturating_sum};
use rust_decimal::Decimal;

use super::types::{
    AnnualTotals, CentreTotal, ExpenseSummary, RankedTotals, RecentExpense, palette_color,
};
use crate::records::{Budget, Centre, CentreDirectory, Expense, Monetary};

/// Default size of the concentrated (pie) view.
pub const DEFAULT_TOP_N: usize = 6;

/// Default size of the recent-expenses table.
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Service for aggregating expenses and budgets.
pub struct AggregationService;

impl AggregationService {
    /// Sums the amounts of `records`. Malformed amounts contribute zero and
    /// the sum saturates instead of overflowing.
    #[must_use]
    pub fn total_amount<T: Monetary>(records: impl IntoIterator<Item = T>) -> Decimal {
        saturating_sum(records.into_iter().map(|r| r.amount_value()))
    }

    /// Expense totals for every centre, in centre-list order.
    ///
    /// Each centre gets a palette colour from its position in `centres`.
    /// Centres whose total is not positive are left out.
    #[must_use]
    pub fn group_totals_by_centre<'a>(
        expenses: impl IntoIterator<Item = &'a Expense>,
        centres: &[Centre],
    ) -> Vec<CentreTotal> {
        let mut sums: HashMap<&CentreId, (Decimal, usize)> = HashMap::new();
        for expense in expenses {
            let entry = sums.entry(&expense.centre_id).or_default();
            entry.0 = entry.0.saturating_add(expense.amount_value());
            entry.1 += 1;
        }

        centres
            .iter()
            .enumerate()
            .filter_map(|(index, centre)| {
                let (total, count) = sums.get(&centre.id).copied().unwrap_or_default();
                (total > Decimal::ZERO).then(|| CentreTotal {
                    centre_id: centre.id.clone(),
                    name: centre.name.clone(),
                    total,
                    count,
                    color: palette_color(index).to_string(),
                })
            })
            .collect()
    }

    /// Sorts group totals by total, descending. Ties keep their input order.
    #[must_use]
    pub fn rank_descending(mut totals: Vec<CentreTotal>) -> RankedTotals {
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        RankedTotals(totals)
    }

    /// The first `n` entries of a ranking.
    #[must_use]
    pub fn top_n(ranked: &RankedTotals, n: usize) -> &[CentreTotal] {
        ranked.top(n)
    }

    /// Budgeted amount per centre name and year.
    ///
    /// Meant for the unfiltered budget collection: it answers how much was
    /// ever budgeted per year, independent of the active selection. Budgets
    /// of unknown centres are grouped under "N/A".
    #[must_use]
    pub fn annual_totals_by_centre_name<'a>(
        budgets: impl IntoIterator<Item = &'a Budget>,
        centres: &[Centre],
    ) -> AnnualTotals {
        let directory = CentreDirectory::new(centres);
        let mut totals = AnnualTotals::new();

        for budget in budgets {
            let name = directory.display_name(&budget.centre_id);
            let total = totals
                .entry(name.to_string())
                .or_default()
                .entry(budget.year)
                .or_default();
            *total = total.saturating_add(budget.amount_value());
        }

        totals
    }

    /// The `n` latest expenses by date with their centre names.
    ///
    /// Expenses sharing a date keep their input order.
    #[must_use]
    pub fn recent_expenses<'a>(
        expenses: impl IntoIterator<Item = &'a Expense>,
        centres: &[Centre],
        n: usize,
    ) -> Vec<RecentExpense> {
        let directory = CentreDirectory::new(centres);
        let mut latest: Vec<&Expense> = expenses.into_iter().collect();
        latest.sort_by(|a, b| b.date.cmp(&a.date));

        latest
            .into_iter()
            .take(n)
            .map(|expense| RecentExpense {
                id: expense.id.clone(),
                description: expense.description.clone(),
                centre_id: expense.centre_id.clone(),
                centre_name: directory.display_name(&expense.centre_id).to_string(),
                amount: expense.amount_value(),
                date: expense.date,
            })
            .collect()
    }

    /// Count, total and average amount of `expenses`.
    #[must_use]
    pub fn expense_summary<T: Monetary>(expenses: impl IntoIterator<Item = T>) -> ExpenseSummary {
        let (count, total) = expenses
            .into_iter()
            .fold((0usize, Decimal::ZERO), |(count, total), e| {
                (count + 1, total.saturating_add(e.amount_value()))
            });

        let average = if count == 0 {
            Decimal::ZERO
        } else {
            (total / Decimal::from(count)).round_dp(2)
        };

        ExpenseSummary {
            count,
            total,
            average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetscope_shared::types::{Amount, BudgetId, ExpenseId};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::records::Quarter;

    fn centre(id: &str, name: &str) -> Centre {
        Centre {
            id: CentreId::new(id),
            name: name.to_string(),
            responsable: String::new(),
        }
    }

    fn expense(id: &str, centre: &str, amount: Amount, date: &str) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            centre_id: CentreId::new(centre),
            amount,
            description: format!("expense {id}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            created_by: None,
        }
    }

    fn budget(centre: &str, year: i32, amount: Decimal) -> Budget {
        Budget {
            id: BudgetId::generate(),
            centre_id: CentreId::new(centre),
            quarter: Quarter::Q1,
            year,
            amount: Amount::new(amount),
        }
    }

    #[test]
    fn test_total_amount_skips_malformed() {
        let expenses = vec![
            expense("e1", "c1", Amount::new(dec!(100.50)), "2024-01-01"),
            expense("e2", "c1", Amount::parse("oops"), "2024-01-02"),
            expense("e3", "c2", Amount::parse("49.50"), "2024-01-03"),
        ];

        assert_eq!(AggregationService::total_amount(&expenses), dec!(150.00));
        assert_eq!(AggregationService::total_amount(Vec::<Expense>::new()), Decimal::ZERO);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let centres = vec![centre("c1", "Finance")];
        let expenses = vec![
            expense("e1", "c1", Amount::parse("50000000000000000000000000000"), "2024-01-01"),
            expense("e2", "c1", Amount::parse("50000000000000000000000000000"), "2024-01-02"),
        ];
        assert!(expenses[0].amount.is_valid());

        assert_eq!(AggregationService::total_amount(&expenses), Decimal::MAX);

        let totals = AggregationService::group_totals_by_centre(&expenses, &centres);
        assert_eq!(totals[0].total, Decimal::MAX);
        assert_eq!(totals[0].count, 2);

        let ranked = AggregationService::rank_descending(totals);
        assert_eq!(ranked.grand_total(), Decimal::MAX);

        let summary = AggregationService::expense_summary(&expenses);
        assert_eq!(summary.total, Decimal::MAX);
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn test_huge_annual_budgets_saturate() {
        let huge = Amount::parse("50000000000000000000000000000").value();
        let budgets = vec![budget("c1", 2024, huge), budget("c1", 2024, huge)];
        let centres = vec![centre("c1", "Finance")];

        let totals = AggregationService::annual_totals_by_centre_name(&budgets, &centres);

        assert_eq!(totals["Finance"][&2024], Decimal::MAX);
    }

    #[test]
    fn test_group_totals_colours_follow_centre_order() {
        let centres = vec![centre("c1", "Finance"), centre("c2", "IT"), centre("c3", "RH")];
        let expenses = vec![
            expense("e1", "c3", Amount::new(dec!(30)), "2024-01-01"),
            expense("e2", "c1", Amount::new(dec!(10)), "2024-01-01"),
            expense("e3", "c3", Amount::new(dec!(5)), "2024-01-01"),
            expense("e4", "ghost", Amount::new(dec!(999)), "2024-01-01"),
        ];

        let totals = AggregationService::group_totals_by_centre(&expenses, &centres);

        assert_eq!(totals.len(), 2, "IT has no expenses and is excluded");
        assert_eq!(totals[0].name, "Finance");
        assert_eq!(totals[0].color, palette_color(0));
        assert_eq!(totals[1].name, "RH");
        assert_eq!(totals[1].total, dec!(35));
        assert_eq!(totals[1].count, 2);
        assert_eq!(totals[1].color, "#FFA726");
    }

    #[test]
    fn test_palette_cycles() {
        let centres: Vec<Centre> = (0..14).map(|i| centre(&format!("c{i}"), "X")).collect();
        let expenses: Vec<Expense> = (0..14)
            .map(|i| expense(&format!("e{i}"), &format!("c{i}"), Amount::new(dec!(1)), "2024-01-01"))
            .collect();

        let totals = AggregationService::group_totals_by_centre(&expenses, &centres);
        assert_eq!(totals[12].color, totals[0].color);
        assert_eq!(totals[13].color, totals[1].color);
    }

    #[test]
    fn test_rank_descending_is_stable() {
        let centres = vec![centre("c1", "A"), centre("c2", "B"), centre("c3", "C")];
        let expenses = vec![
            expense("e1", "c1", Amount::new(dec!(50)), "2024-01-01"),
            expense("e2", "c2", Amount::new(dec!(80)), "2024-01-01"),
            expense("e3", "c3", Amount::new(dec!(50)), "2024-01-01"),
        ];

        let ranked = AggregationService::rank_descending(
            AggregationService::group_totals_by_centre(&expenses, &centres),
        );
        let names: Vec<&str> = ranked.as_slice().iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(ranked.grand_total(), dec!(180));
        assert_eq!(AggregationService::top_n(&ranked, 2), &ranked.as_slice()[..2]);
        assert_eq!(AggregationService::top_n(&ranked, DEFAULT_TOP_N).len(), 3);
    }

    #[test]
    fn test_annual_totals_use_names_and_fallback() {
        let centres = vec![centre("c1", "Finance")];
        let budgets = vec![
            budget("c1", 2023, dec!(100)),
            budget("c1", 2024, dec!(200)),
            budget("c1", 2024, dec!(50)),
            budget("ghost", 2024, dec!(7)),
        ];

        let totals = AggregationService::annual_totals_by_centre_name(&budgets, &centres);

        assert_eq!(totals["Finance"][&2023], dec!(100));
        assert_eq!(totals["Finance"][&2024], dec!(250));
        assert_eq!(totals["N/A"][&2024], dec!(7));
    }

    #[test]
    fn test_recent_expenses_latest_first() {
        let centres = vec![centre("c1", "Finance")];
        let expenses = vec![
            expense("old", "c1", Amount::new(dec!(1)), "2023-01-01"),
            expense("new", "c1", Amount::new(dec!(2)), "2024-06-01"),
            expense("mid", "ghost", Amount::new(dec!(3)), "2024-02-01"),
            expense("new2", "c1", Amount::new(dec!(4)), "2024-06-01"),
        ];

        let recent = AggregationService::recent_expenses(&expenses, &centres, 3);
        let ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, vec!["new", "new2", "mid"]);
        assert_eq!(recent[2].centre_name, "N/A");
        assert_eq!(expenses[0].id.as_str(), "old", "input left untouched");
    }

    #[test]
    fn test_expense_summary() {
        let expenses = vec![
            expense("e1", "c1", Amount::new(dec!(10)), "2024-01-01"),
            expense("e2", "c1", Amount::new(dec!(20)), "2024-01-01"),
            expense("e3", "c1", Amount::new(dec!(10)), "2024-01-01"),
        ];

        let summary = AggregationService::expense_summary(&expenses);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, dec!(40));
        assert_eq!(summary.average, dec!(13.33));

        assert_eq!(
            AggregationService::expense_summary(Vec::<Expense>::new()),
            ExpenseSummary::default()
        );
    }
}
