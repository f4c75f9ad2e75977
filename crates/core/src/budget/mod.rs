//! Budget variance analysis.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::BudgetService;
pub use types::{BudgetVarianceRow, GlobalVariance, Interpretation, VarianceResult};
