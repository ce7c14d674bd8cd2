//! Financial goal progress and deadline tracking.

pub mod contribution;
pub mod progress;


pub use contribution::{Contribution, apply_contribution};
pub use progress::{DeadlineLabel, GoalBadge, GoalProgress, GoalState, ProgressTier};
