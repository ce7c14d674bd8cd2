//! Goal progress calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rupiah_shared::MonetaryAmount;

use crate::currency::percent_of;

/// Lifecycle state of a goal as stored by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalState {
    /// Accepting contributions.
    #[default]
    Active,
    /// Target reached or marked done.
    Completed,
    /// Temporarily on hold.
    Paused,
    /// Abandoned.
    Cancelled,
}

/// Progress bar colour tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    /// Past the deadline and not completed (red).
    Overdue,
    /// 100% or more (green).
    Complete,
    /// 75% or more (blue).
    OnTrack,
    /// 50% or more (yellow).
    Halfway,
    /// Below 50% (gray).
    Started,
}

impl ProgressTier {
    /// Returns the tier as a snake_case string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Complete => "complete",
            Self::OnTrack => "on_track",
            Self::Halfway => "halfway",
            Self::Started => "started",
        }
    }
}

/// Status badge shown next to a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalBadge {
    /// "Selesai".
    Completed,
    /// "Terlambat".
    Overdue,
    /// "Mendekati Deadline".
    NearDeadline,
    /// "Aktif".
    Active,
}

impl GoalBadge {
    /// Badge text as shown in the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Selesai",
            Self::Overdue => "Terlambat",
            Self::NearDeadline => "Mendekati Deadline",
            Self::Active => "Aktif",
        }
    }
}

/// Relative deadline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineLabel {
    /// The deadline passed this many days ago.
    Late(u64),
    /// The deadline is today.
    Today,
    /// This many days are left.
    DaysLeft(u64),
}

impl DeadlineLabel {
    /// Builds the label from a signed day count.
    #[must_use]
    pub fn from_days(days_remaining: i64) -> Self {
        match days_remaining {
            0 => Self::Today,
            d if d < 0 => Self::Late(d.unsigned_abs()),
            d => Self::DaysLeft(d.unsigned_abs()),
        }
    }
}

impl std::fmt::Display for DeadlineLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Late(days) => write!(f, "{days} hari terlambat"),
            Self::Today => write!(f, "Hari ini"),
            Self::DaysLeft(days) => write!(f, "{days} hari lagi"),
        }
    }
}

/// Progress of a goal towards its target as of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Target amount.
    pub target: MonetaryAmount,
    /// Amount saved so far.
    pub current: MonetaryAmount,
    /// Deadline date.
    pub deadline: NaiveDate,
    /// Saved as a percentage of the target.
    pub progress_percentage: Decimal,
    /// Amount still needed, never below zero.
    pub remaining: MonetaryAmount,
    /// Whole days until the deadline; negative once it has passed.
    pub days_remaining: i64,
    /// Marked completed, or current has reached the target.
    pub is_completed: bool,
    /// Past the deadline without being completed.
    pub is_overdue: bool,
}

impl GoalProgress {
    /// Default number of days before the deadline that counts as near.
    pub const DEFAULT_NEAR_DEADLINE_DAYS: i64 = 7;

    /// Calculates progress for a goal as of `today`.
    #[must_use]
    pub fn calculate(
        target: MonetaryAmount,
        current: MonetaryAmount,
        deadline: NaiveDate,
        today: NaiveDate,
        state: GoalState,
    ) -> Self {
        let days_remaining = (deadline - today).num_days();
        let is_completed = state == GoalState::Completed || current >= target;

        Self {
            target,
            current,
            deadline,
            progress_percentage: percent_of(current, target),
            remaining: target.saturating_sub(current),
            days_remaining,
            is_completed,
            is_overdue: days_remaining < 0 && !is_completed,
        }
    }

    /// Progress bar colour tier.
    #[must_use]
    pub fn tier(&self) -> ProgressTier {
        if self.is_overdue {
            ProgressTier::Overdue
        } else if self.progress_percentage >= Decimal::ONE_HUNDRED {
            ProgressTier::Complete
        } else if self.progress_percentage >= Decimal::from(75) {
            ProgressTier::OnTrack
        } else if self.progress_percentage >= Decimal::from(50) {
            ProgressTier::Halfway
        } else {
            ProgressTier::Started
        }
    }

    /// Status badge, flagging goals due within `near_deadline_days`.
    #[must_use]
    pub fn badge(&self, near_deadline_days: i64) -> GoalBadge {
        if self.is_completed {
            GoalBadge::Completed
        } else if self.is_overdue {
            GoalBadge::Overdue
        } else if self.days_remaining <= near_deadline_days {
            GoalBadge::NearDeadline
        } else {
            GoalBadge::Active
        }
    }

    /// Relative deadline text.
    #[must_use]
    pub fn deadline_label(&self) -> DeadlineLabel {
        DeadlineLabel::from_days(self.days_remaining)
    }

    /// Width of the progress bar fill, in percent, capped at 100.
    #[must_use]
    pub fn bar_width(&self) -> Decimal {
        self.progress_percentage.min(Decimal::ONE_HUNDRED)
    }

    /// Whether the "mark completed" action applies: the target is reached
    /// but the goal is not yet recorded as completed.
    #[must_use]
    pub fn can_mark_completed(&self, state: GoalState) -> bool {
        self.progress_percentage >= Decimal::ONE_HUNDRED && state != GoalState::Completed
    }
}
