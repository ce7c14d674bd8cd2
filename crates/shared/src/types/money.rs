//! Whole-unit monetary amount.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Rupiah amounts carry no fractional subunit, so the amount is an unsigned
//! integer; ratios over amounts go through `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative amount of whole currency units.
///
/// Serializes as a plain integer, which is the shape the backend expects in
/// request bodies.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MonetaryAmount(u64);

impl MonetaryAmount {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a new amount from whole units.
    #[must_use]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units.
    #[must_use]
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtracts `other`, clamping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Adds `other`, clamping at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Returns the amount as a `Decimal` for ratio calculations.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl From<u64> for MonetaryAmount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl From<MonetaryAmount> for u64 {
    fn from(amount: MonetaryAmount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
