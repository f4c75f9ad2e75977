//! Monetary amounts with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary amount as delivered by the record store.
///
/// The store accepts free-form input, so an amount may arrive as a JSON
/// number, as numeric text, or as something unparsable. Unparsable amounts
/// are kept as *malformed* and contribute zero to every sum instead of
/// failing the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Amount(Option<Decimal>);

impl Amount {
    /// A valid zero amount.
    pub const ZERO: Self = Self(Some(Decimal::ZERO));

    /// Creates a valid amount.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(Some(value))
    }

    /// Creates a malformed amount.
    #[must_use]
    pub const fn malformed() -> Self {
        Self(None)
    }

    /// Parses numeric text, accepting plain and scientific notation.
    ///
    /// Anything else yields a malformed amount.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::malformed();
        }

        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_or_else(|_| Self::malformed(), Self::new)
    }

    /// Returns the value to use in sums: the amount, or zero when malformed.
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0.unwrap_or(Decimal::ZERO)
    }

    /// Returns the parsed decimal, if any.
    #[must_use]
    pub const fn as_decimal(self) -> Option<Decimal> {
        self.0
    }

    /// Returns true if the amount parsed successfully.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0.is_some()
    }
}

/// Sums `values`, saturating at `Decimal::MAX` or `Decimal::MIN` instead of
/// overflowing.
#[must_use]
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(number) => Self::parse(&number.to_string()),
            RawAmount::Text(text) => Self::parse(&text),
            RawAmount::Other(_) => Self::malformed(),
        })
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
