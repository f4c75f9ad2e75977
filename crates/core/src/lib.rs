//! Core reconciliation logic for Budgetscope.
//!
//! This crate contains pure business logic with ZERO I/O: it never fetches,
//! stores or logs anything. Hosts load records through a [`records::RecordSource`]
//! and feed borrowed collections into the services below.
//!
//! # Modules
//!
//! - `records` - Centre, expense and budget records, quarters, record sources
//! - `filter` - Year / quarter / centre selections and their predicates
//! - `aggregation` - Totals, per-centre grouping, ranking and top-N views
//! - `trend` - Monthly expense buckets over a month, quarter or year window
//! - `budget` - Budget vs actual variance, per budget and global
//! - `listing` - Expense list search, sorting and pagination
//! - `dashboard` - Composition of the dashboard figures
//! - `prediction` - Seam for the external expense prediction service

pub mod aggregation;
pub mod budget;
pub mod dashboard;
pub mod filter;
pub mod listing;
pub mod prediction;
pub mod records;
pub mod trend;
