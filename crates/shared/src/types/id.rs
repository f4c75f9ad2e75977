//! Typed IDs for type-safe record references.
//!
//! Using typed IDs prevents accidentally passing a `BudgetId` where a `CentreId` is expected.
//! Identifiers are opaque strings issued by the record store.

use std::convert::Infallible;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Wire forms accepted for identifiers: a bare string, or an extended-JSON
/// object such as `{"$oid": "65a1..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Plain(String),
    Extended {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Plain(value) | Self::Extended { oid: value } => value,
        }
    }
}

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier issued by the record store.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Mints a fresh identifier using UUID v7 (time-ordered).
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::now_v7().simple().to_string())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

typed_id!(CentreId, "Unique identifier for a cost centre.");
typed_id!(ResponsableId, "Unique identifier for a person accountable for a centre.");
typed_id!(ExpenseId, "Unique identifier for an expense.");
typed_id!(BudgetId, "Unique identifier for a quarterly budget.");
typed_id!(UserId, "Unique identifier for the actor who recorded an expense.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_new_and_as_str() {
        let id = CentreId::new("65a1f0c2");
        assert_eq!(id.as_str(), "65a1f0c2");
        assert_eq!(id.clone().into_inner(), "65a1f0c2");
    }

    #[test]
    fn test_typed_id_generate_is_unique() {
        let first = ExpenseId::generate();
        let second = ExpenseId::generate();
        assert!(!first.as_str().is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn test_typed_id_display_and_from_str() {
        let id = BudgetId::from_str("b-42").unwrap();
        assert_eq!(format!("{id}"), "b-42");
        assert_eq!(BudgetId::from("b-42"), id);
    }

    #[test]
    fn test_typed_id_deserializes_plain_string() {
        let id: CentreId = serde_json::from_str(r#""c1""#).unwrap();
        assert_eq!(id, CentreId::new("c1"));
    }

    #[test]
    fn test_typed_id_deserializes_extended_json() {
        let id: CentreId = serde_json::from_str(r#"{"$oid": "65a1f0c2"}"#).unwrap();
        assert_eq!(id.as_str(), "65a1f0c2");
    }

    #[test]
    fn test_typed_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&UserId::new("admin")).unwrap();
        assert_eq!(json, r#""admin""#);
    }

    #[test]
    fn test_typed_id_rejects_numbers() {
        assert!(serde_json::from_str::<CentreId>("42").is_err());
    }
}
