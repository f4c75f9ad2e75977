//! Expense list view support.
//!
//! Search, centre and date filters, amount ordering and fixed-size pages,
//! with summary figures computed before the page is cut.

pub mod error;
pub mod service;
pub mod types;

pub use error::ListingError;
pub use service::ListingService;
pub use types::{ExpenseListing, ExpenseQuery, ExpenseRow, SortOrder, parse_bound};
