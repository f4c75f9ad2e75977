//! Trend bucketer.
//!
//! Expenses are summed per calendar month over a window reaching back a
//! month, a quarter or a year from a reference date.

pub mod bucketer;
pub mod error;
pub mod types;


pub use bucketer::TrendBucketer;
pub use error::TrendError;
pub use types::{TrendBucket, TrendRange, TrendWindow, french_month_label};
