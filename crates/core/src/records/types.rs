//! Record types consumed by the engine.
//!
//! Field names are English; aliases accept the record store's native
//! (French) field names so raw exports deserialize unchanged.

use budgetscope_shared::types::{Amount, BudgetId, CentreId, ExpenseId, ResponsableId, UserId};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::quarter::Quarter;

/// A cost centre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Centre {
    /// Centre ID.
    #[serde(alias = "_id")]
    pub id: CentreId,
    /// Display name.
    #[serde(alias = "nom")]
    pub name: String,
    /// Denormalized "first last" name of the responsible person.
    #[serde(default)]
    pub responsable: String,
}

/// A person accountable for one or more centres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsable {
    /// Responsable ID.
    #[serde(alias = "_id")]
    pub id: ResponsableId,
    /// Last name.
    #[serde(alias = "nom")]
    pub last_name: String,
    /// First name.
    #[serde(alias = "prenom")]
    pub first_name: String,
}

impl Responsable {
    /// The name as stored on centres: first name, then last name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single expense booked against a centre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    #[serde(alias = "_id")]
    pub id: ExpenseId,
    /// Centre the expense is booked against.
    pub centre_id: CentreId,
    /// Amount spent.
    #[serde(default, alias = "montant")]
    pub amount: Amount,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Calendar date of the expense.
    ///
    /// Accepts `YYYY-MM-DD`, a datetime (RFC 3339 or without offset) whose
    /// date part is kept as written, or either form wrapped as `{"$date": …}`.
    #[serde(deserialize_with = "deserialize_record_date")]
    pub date: NaiveDate,
    /// Actor who recorded the expense.
    #[serde(default)]
    pub created_by: Option<UserId>,
}

impl Expense {
    /// Calendar year of the expense.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Quarter derived from the expense date.
    #[must_use]
    pub fn quarter(&self) -> Quarter {
        Quarter::from_date(self.date)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Extended {
        #[serde(rename = "$date")]
        date: String,
    },
}

/// Parses a record date, falling back from a plain date to datetimes.
fn parse_record_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn deserialize_record_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDate, D::Error> {
    let (RawDate::Text(text) | RawDate::Extended { date: text }) =
        RawDate::deserialize(deserializer)?;
    parse_record_date(&text)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid record date: {text}")))
}

/// A quarterly budget for one centre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    #[serde(alias = "_id")]
    pub id: BudgetId,
    /// Centre the budget applies to.
    pub centre_id: CentreId,
    /// Quarter of the year.
    #[serde(alias = "trimester")]
    pub quarter: Quarter,
    /// Calendar year.
    #[serde(alias = "annee")]
    pub year: i32,
    /// Budgeted amount.
    #[serde(default, alias = "montant")]
    pub amount: Amount,
}

/// Records carrying a monetary amount.
pub trait Monetary {
    /// The amount to use in sums. Malformed amounts count as zero.
    fn amount_value(&self) -> Decimal;

    /// Returns true if the stored amount parsed successfully.
    fn has_valid_amount(&self) -> bool;
}

impl Monetary for Expense {
    fn amount_value(&self) -> Decimal {
        self.amount.value()
    }

    fn has_valid_amount(&self) -> bool {
        self.amount.is_valid()
    }
}

impl Monetary for Budget {
    fn amount_value(&self) -> Decimal {
        self.amount.value()
    }

    fn has_valid_amount(&self) -> bool {
        self.amount.is_valid()
    }
}

impl<T: Monetary + ?Sized> Monetary for &T {
    fn amount_value(&self) -> Decimal {
        (**self).amount_value()
    }

    fn has_valid_amount(&self) -> bool {
        (**self).has_valid_amount()
    }
}
