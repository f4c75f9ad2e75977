//! Shared types, errors, and configuration for Budgetscope.
//!
//! This crate provides common types used across all other crates:
//! - Lenient monetary amounts with decimal precision
//! - Typed IDs for type-safe record references
//! - In-memory pagination for list views
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
