//! Record source seam.
//!
//! The engine never fetches records itself. Hosts implement [`RecordSource`]
//! over whatever store they use and hand the materialized collections in.

use serde::{Deserialize, Serialize};

use super::error::RecordError;
use super::types::{Budget, Centre, Expense, Responsable};

/// Read access to the four record collections.
pub trait RecordSource {
    /// Lists all centres.
    fn centres(&self) -> Result<Vec<Centre>, RecordError>;

    /// Lists all responsables.
    fn responsables(&self) -> Result<Vec<Responsable>, RecordError>;

    /// Lists all expenses.
    fn expenses(&self) -> Result<Vec<Expense>, RecordError>;

    /// Lists all budgets.
    fn budgets(&self) -> Result<Vec<Budget>, RecordError>;

    /// Fetches every collection at once.
    fn snapshot(&self) -> Result<Snapshot, RecordError> {
        Ok(Snapshot {
            centres: self.centres()?,
            responsables: self.responsables()?,
            expenses: self.expenses()?,
            budgets: self.budgets()?,
        })
    }
}

/// All record collections as of one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Centres.
    #[serde(default)]
    pub centres: Vec<Centre>,
    /// Responsables.
    #[serde(default)]
    pub responsables: Vec<Responsable>,
    /// Expenses.
    #[serde(default, alias = "depenses")]
    pub expenses: Vec<Expense>,
    /// Budgets.
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    /// Number of expenses and budgets whose amount failed to parse.
    #[must_use]
    pub fn malformed_amounts(&self) -> usize {
        let expenses = self.expenses.iter().filter(|e| !e.amount.is_valid()).count();
        let budgets = self.budgets.iter().filter(|b| !b.amount.is_valid()).count();
        expenses + budgets
    }

    /// Number of expenses and budgets referencing a centre missing from `centres`.
    #[must_use]
    pub fn orphan_references(&self) -> usize {
        let directory = super::CentreDirectory::new(&self.centres);
        let expenses = self
            .expenses
            .iter()
            .filter(|e| directory.get(&e.centre_id).is_none())
            .count();
        let budgets = self
            .budgets
            .iter()
            .filter(|b| directory.get(&b.centre_id).is_none())
            .count();
        expenses + budgets
    }
}

impl RecordSource for Snapshot {
    fn centres(&self) -> Result<Vec<Centre>, RecordError> {
        Ok(self.centres.clone())
    }

    fn responsables(&self) -> Result<Vec<Responsable>, RecordError> {
        Ok(self.responsables.clone())
    }

    fn expenses(&self) -> Result<Vec<Expense>, RecordError> {
        Ok(self.expenses.clone())
    }

    fn budgets(&self) -> Result<Vec<Budget>, RecordError> {
        Ok(self.budgets.clone())
    }
}
