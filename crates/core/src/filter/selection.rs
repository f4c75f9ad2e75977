//! Year / quarter / centre selection and the predicates it builds.

use budgetscope_shared::types::CentreId;
use serde::{Deserialize, Serialize};

use super::error::FilterError;
use crate::records::{Budget, Expense, Quarter};

/// Either every value, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope<T> {
    /// No restriction.
    All,
    /// Only records with this value.
    Only(T),
}

impl<T> Default for Scope<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Scope<T> {
    /// Returns true if `value` passes this scope.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> Scope<T> {
    /// Returns true if the scope is unrestricted.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected value, if restricted.
    #[must_use]
    pub const fn as_only(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }

    /// Parses a control value: `"all"` (any case) or an empty string means
    /// [`Scope::All`], anything else goes through `parse`.
    pub fn parse_with<E>(text: &str, parse: impl FnOnce(&str) -> Result<T, E>) -> Result<Self, E> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            parse(trimmed).map(Self::Only)
        }
    }
}

impl<T> From<Option<T>> for Scope<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// The active dashboard selection.
///
/// Builds equivalent predicates over expenses (year and quarter derived from
/// the expense date) and budgets (their own year and quarter fields).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Calendar year.
    #[serde(default)]
    pub year: Scope<i32>,
    /// Quarter of the year.
    #[serde(default)]
    pub quarter: Scope<Quarter>,
    /// Centre.
    #[serde(default)]
    pub centre: Scope<CentreId>,
}

impl Selection {
    /// A selection matching every record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to one year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Scope::Only(year);
        self
    }

    /// Restricts to one quarter.
    #[must_use]
    pub fn with_quarter(mut self, quarter: Quarter) -> Self {
        self.quarter = Scope::Only(quarter);
        self
    }

    /// Restricts to one centre.
    #[must_use]
    pub fn with_centre(mut self, centre: CentreId) -> Self {
        self.centre = Scope::Only(centre);
        self
    }

    /// Builds a selection from the string values of the dashboard controls.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if the year or quarter is neither "all" nor valid.
    pub fn parse(year: &str, quarter: &str, centre: &str) -> Result<Self, FilterError> {
        let year = Scope::parse_with(year, |text| {
            text.parse::<i32>()
                .map_err(|_| FilterError::InvalidYear(text.to_string()))
        })?;
        let quarter = Scope::parse_with(quarter, |text| {
            text.parse::<Quarter>()
                .map_err(|_| FilterError::InvalidQuarter(text.to_string()))
        })?;
        let centre = Scope::parse_with(centre, |text| Ok::<_, FilterError>(CentreId::new(text)))?;

        Ok(Self {
            year,
            quarter,
            centre,
        })
    }

    /// Returns true if the expense falls inside the selection.
    #[must_use]
    pub fn matches_expense(&self, expense: &Expense) -> bool {
        self.year.admits(&expense.year())
            && self.quarter.admits(&expense.quarter())
            && self.centre.admits(&expense.centre_id)
    }

    /// Returns true if the budget falls inside the selection.
    #[must_use]
    pub fn matches_budget(&self, budget: &Budget) -> bool {
        self.year.admits(&budget.year)
            && self.quarter.admits(&budget.quarter)
            && self.centre.admits(&budget.centre_id)
    }

    /// Expense predicate borrowing this selection.
    pub fn expense_predicate(&self) -> impl Fn(&Expense) -> bool + '_ {
        move |expense| self.matches_expense(expense)
    }

    /// Budget predicate borrowing this selection.
    pub fn budget_predicate(&self) -> impl Fn(&Budget) -> bool + '_ {
        move |budget| self.matches_budget(budget)
    }

    /// Expenses inside the selection, in input order.
    #[must_use]
    pub fn filter_expenses<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches_expense(e)).collect()
    }

    /// Budgets inside the selection, in input order.
    #[must_use]
    pub fn filter_budgets<'a>(&self, budgets: &'a [Budget]) -> Vec<&'a Budget> {
        budgets.iter().filter(|b| self.matches_budget(b)).collect()
    }
}
