//! Domain records: centres, responsables, expenses and budgets.
//!
//! Records are owned by the upstream store. Nothing in this crate mutates
//! them; every operation borrows the collections and projects new values.

pub mod directory;
pub mod error;
pub mod quarter;
pub mod source;
pub mod types;

pub use directory::{CentreDirectory, ResponsableLink, UNASSIGNED_CENTRE_NAME};
pub use error::RecordError;
pub use quarter::Quarter;
pub use source::{RecordSource, Snapshot};
pub use types::{Budget, Centre, Expense, Monetary, Responsable};
