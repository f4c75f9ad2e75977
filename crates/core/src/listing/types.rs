//! Listing query and row types.

use std::fmt;
use std::str::FromStr;

use budgetscope_shared::types::{CentreId, ExpenseId, PageRequest, PageResponse, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ListingError;
use crate::aggregation::ExpenseSummary;
use crate::filter::Scope;

/// Sort direction on the expense amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest amount first.
    Asc,
    /// Largest amount first.
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "" | "desc" => Ok(Self::Desc),
            _ => Err(ListingError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Parses an inclusive date bound. An empty bound is unbounded.
///
/// # Errors
///
/// Returns `ListingError::InvalidDateBound` unless `text` is empty or `YYYY-MM-DD`.
pub fn parse_bound(text: &str) -> Result<Option<NaiveDate>, ListingError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ListingError::InvalidDateBound(text.to_string()))
}

/// What the expense list shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseQuery {
    /// Case-insensitive text matched against description or centre name.
    pub search: String,
    /// Centre restriction.
    pub centre: Scope<CentreId>,
    /// Earliest date, inclusive.
    pub date_from: Option<NaiveDate>,
    /// Latest date, inclusive.
    pub date_to: Option<NaiveDate>,
    /// Amount ordering.
    pub sort: SortOrder,
    /// Requested page.
    pub page: PageRequest,
}

impl ExpenseQuery {
    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts the list to one centre.
    #[must_use]
    pub fn with_centre(mut self, centre: CentreId) -> Self {
        self.centre = Scope::Only(centre);
        self
    }

    /// Sets both date bounds from their text form.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::InvalidDateBound` if either bound is malformed.
    pub fn with_date_range(mut self, from: &str, to: &str) -> Result<Self, ListingError> {
        self.date_from = parse_bound(from)?;
        self.date_to = parse_bound(to)?;
        Ok(self)
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the requested page.
    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

/// One row of the expense list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
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
    /// Actor who recorded the expense.
    pub created_by: Option<UserId>,
}

/// A page of the expense list with summary figures over every matching row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListing {
    /// The requested page.
    pub page: PageResponse<ExpenseRow>,
    /// Count, total and average of all matching expenses.
    pub summary: ExpenseSummary,
}
