//! Monthly trend bucketing.

use chrono::{Months, NaiveDate};

use super::types::{TrendBucket, TrendRange, TrendWindow, month_index, month_start};
use crate::records::{Expense, Monetary};

/// Builds contiguous monthly expense buckets over a window.
pub struct TrendBucketer;

impl TrendBucketer {
    /// Computes the window for `range`, ending on `now`.
    ///
    /// - `Month`: from the first day of the current month
    /// - `Quarter`: from the first day of the month two months back
    /// - `Year`: from the same day twelve months back (clamped to month end)
    #[must_use]
    pub fn window(now: NaiveDate, range: TrendRange) -> TrendWindow {
        let start = match range {
            TrendRange::Month => month_start(now),
            TrendRange::Quarter => month_start(now)
                .checked_sub_months(Months::new(2))
                .unwrap_or_else(|| month_start(now)),
            TrendRange::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now),
        };

        TrendWindow { start, end: now }
    }

    /// Sums `expenses` into one bucket per calendar month of the window,
    /// oldest first. Months without expenses are present with a zero amount.
    ///
    /// A bucket spans its whole month, so expenses later in the current
    /// month than `now` are still counted.
    #[must_use]
    pub fn buckets<'a>(
        now: NaiveDate,
        range: TrendRange,
        expenses: impl IntoIterator<Item = &'a Expense>,
    ) -> Vec<TrendBucket> {
        let window = Self::window(now, range);
        Self::buckets_for_window(&window, expenses)
    }

    /// Sums `expenses` into the monthly buckets of an explicit window.
    #[must_use]
    pub fn buckets_for_window<'a>(
        window: &TrendWindow,
        expenses: impl IntoIterator<Item = &'a Expense>,
    ) -> Vec<TrendBucket> {
        let mut buckets: Vec<TrendBucket> = window.months().map(TrendBucket::empty).collect();
        let origin = month_index(window.start);

        for expense in expenses {
            if !window.contains(expense.date) {
                continue;
            }
            let Ok(offset) = usize::try_from(month_index(expense.date) - origin) else {
                continue;
            };
            if let Some(bucket) = buckets.get_mut(offset) {
                bucket.amount = bucket.amount.saturating_add(expense.amount_value());
                bucket.count += 1;
            }
        }

        buckets
    }
}
