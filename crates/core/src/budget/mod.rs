//! Budget usage tracking.

pub mod usage;


pub use usage::{BudgetUsage, UsageLevel};
