//! Trend data types.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TrendError;

/// How far back the trend window reaches.
///
/// The bucket width is always one calendar month; the range only sets the
/// window length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendRange {
    /// The current month only.
    Month,
    /// The current month and the two before it.
    Quarter,
    /// Twelve months back from the reference date.
    #[default]
    Year,
}

impl fmt::Display for TrendRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Quarter => write!(f, "quarter"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for TrendRange {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(TrendError::UnknownRange(s.to_string())),
        }
    }
}

/// The date window a trend covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendWindow {
    /// Window start as computed from the range.
    pub start: NaiveDate,
    /// Reference date the window ends on.
    pub end: NaiveDate,
}

impl TrendWindow {
    /// First day of the start month: the first bucket.
    #[must_use]
    pub fn first_month(&self) -> NaiveDate {
        month_start(self.start)
    }

    /// First day of the end month: the last bucket.
    #[must_use]
    pub fn last_month(&self) -> NaiveDate {
        month_start(self.end)
    }

    /// Last calendar day covered by the last bucket.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        month_end(self.end)
    }

    /// Returns true if `date` falls in one of the window's month buckets.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_month() && date <= self.last_day()
    }

    /// Number of month buckets in the window.
    #[must_use]
    pub fn month_count(&self) -> usize {
        let span = month_index(self.end) - month_index(self.start) + 1;
        usize::try_from(span).unwrap_or(0)
    }

    /// Month starts from the first bucket to the last, oldest first.
    pub fn months(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = self.last_month();
        std::iter::successors(Some(self.first_month()), move |current| {
            current
                .checked_add_months(Months::new(1))
                .filter(|next| *next <= last)
        })
    }
}

/// One month of the trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendBucket {
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Default short label, e.g. "janv. 24".
    pub label: String,
    /// Sum of expenses dated within the month.
    pub amount: Decimal,
    /// Number of expenses summed.
    pub count: usize,
}

impl TrendBucket {
    /// Creates an empty bucket for the month starting on `month_start`.
    #[must_use]
    pub fn empty(month_start: NaiveDate) -> Self {
        Self {
            month_start,
            label: french_month_label(month_start),
            amount: Decimal::ZERO,
            count: 0,
        }
    }

    /// Last day of the bucket's month.
    #[must_use]
    pub fn month_end(&self) -> NaiveDate {
        month_end(self.month_start)
    }
}

const FRENCH_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Short French month and two-digit year, e.g. "févr. 24".
#[must_use]
pub fn french_month_label(date: NaiveDate) -> String {
    format!(
        "{} {:02}",
        FRENCH_MONTHS[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}

pub(super) fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub(super) fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Months since year 0, for bucket arithmetic.
pub(super) fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}
