//! Shared types, errors, and configuration for Rupiah.
//!
//! This crate provides common types used across all other crates:
//! - `MonetaryAmount`, the whole-unit amount every form submits
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::MonetaryAmount;
