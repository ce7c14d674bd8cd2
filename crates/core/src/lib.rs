//! Core formatting and calculation logic for Rupiah.
//!
//! This crate contains pure logic with ZERO web or database dependencies.
//! Every form and display surface of the dashboard goes through it.
//!
//! # Modules
//!
//! - `currency` - Amount formatting, digit parsing, and the amount input field
//! - `budget` - Budget usage percentage and warning levels
//! - `goal` - Financial goal progress and deadline tracking

pub mod budget;
pub mod currency;
pub mod goal;

pub use currency::{format_as_typed, format_for_display, parse_digits, strip_non_digits};
