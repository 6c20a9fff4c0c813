//! Shared types, errors, and configuration for Safal.
//!
//! This crate provides common types used across all other crates:
//! - Rupee amounts with decimal precision
//! - Crore/lakh currency formatting
//! - Typed IDs for property and blog lookups
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use config::{AppConfig, CalculatorConfig, ListingConfig};
pub use error::{AppError, AppResult};
pub use format::{format_inr, format_percent};
