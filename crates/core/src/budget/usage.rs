//! Budget usage calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rupiah_shared::MonetaryAmount;

use crate::currency::percent_of;

/// Usage level of a budget, driving the progress bar colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    /// Below the warning threshold (green).
    Safe,
    /// At or above the warning threshold (yellow).
    Warning,
    /// Fully used or overspent (red).
    Exceeded,
}

impl UsageLevel {
    /// Classifies a usage percentage against a warning threshold.
    #[must_use]
    pub fn classify(usage_percentage: Decimal, warning_percent: Decimal) -> Self {
        if usage_percentage >= Decimal::ONE_HUNDRED {
            Self::Exceeded
        } else if usage_percentage >= warning_percent {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// Returns the level as a lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }
}

impl std::fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of a budget has been spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUsage {
    /// Budgeted amount.
    pub limit: MonetaryAmount,
    /// Amount spent in the budget period.
    pub spent: MonetaryAmount,
    /// Amount left, never below zero.
    pub remaining: MonetaryAmount,
    /// Spent as a percentage of the limit.
    pub usage_percentage: Decimal,
    /// Usage level.
    pub level: UsageLevel,
}

impl BudgetUsage {
    /// Default warning threshold in percent.
    pub const DEFAULT_WARNING_PERCENT: u32 = 80;

    /// Calculates usage with the default warning threshold.
    #[must_use]
    pub fn calculate(limit: MonetaryAmount, spent: MonetaryAmount) -> Self {
        Self::with_warning_percent(limit, spent, Self::DEFAULT_WARNING_PERCENT)
    }

    /// Calculates usage with a custom warning threshold.
    #[must_use]
    pub fn with_warning_percent(
        limit: MonetaryAmount,
        spent: MonetaryAmount,
        warning_percent: u32,
    ) -> Self {
        let usage_percentage = percent_of(spent, limit);
        let level = UsageLevel::classify(usage_percentage, Decimal::from(warning_percent));

        Self {
            limit,
            spent,
            remaining: limit.saturating_sub(spent),
            usage_percentage,
            level,
        }
    }

    /// Width of the progress bar fill, in percent, capped at 100.
    #[must_use]
    pub fn bar_width(&self) -> Decimal {
        self.usage_percentage.min(Decimal::ONE_HUNDRED)
    }

    /// Returns true if more was spent than budgeted.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    /// Amount spent beyond the limit, zero when within budget.
    #[must_use]
    pub fn overspent(&self) -> MonetaryAmount {
        self.spent.saturating_sub(self.limit)
    }
}
