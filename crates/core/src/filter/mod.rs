//! Filter predicate builder.
//!
//! A [`Selection`] of year, quarter and centre yields matching predicates
//! over expenses and budgets. Predicates are pure and reusable.

pub mod error;
pub mod selection;

pub use error::FilterError;
pub use selection::{Scope, Selection};
