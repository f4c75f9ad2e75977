//! Dashboard composer.
//!
//! Combines the filter, aggregation, trend and variance figures shown on the
//! dashboard into one response.

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::{DashboardMetrics, DashboardRequest};
