//! Aggregation engine.
//!
//! This module turns expense and budget collections into:
//! - Totals over any (filtered) collection
//! - Per-centre totals with chart colours, ranked descending
//! - Top-N prefixes for concentrated views
//! - Annual budget totals per centre name
//! - Recent expenses and list summaries

pub mod service;
pub mod types;


pub use service::{AggregationService, DEFAULT_RECENT_COUNT, DEFAULT_TOP_N};
pub use types::*;
