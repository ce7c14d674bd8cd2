//! Adding saved amounts to a goal.

use rupiah_shared::{AppError, AppResult, MonetaryAmount};

use super::progress::GoalState;

/// Result of adding an amount to a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    /// New saved amount, capped at the target.
    pub current: MonetaryAmount,
    /// New lifecycle state.
    pub state: GoalState,
}

/// Adds `amount` to a goal's saved amount.
///
/// Reaching the target completes the goal and caps the saved amount at the
/// target.
///
/// # Errors
///
/// Returns a validation error if the amount is zero or the goal is not active.
pub fn apply_contribution(
    state: GoalState,
    current: MonetaryAmount,
    target: MonetaryAmount,
    amount: MonetaryAmount,
) -> AppResult<Contribution> {
    if amount.is_zero() {
        return Err(AppError::Validation(
            "amount must be greater than zero".to_string(),
        ));
    }
    if state != GoalState::Active {
        return Err(AppError::Validation(
            "only active goals accept contributions".to_string(),
        ));
    }

    let added = current.saturating_add(amount);
    if added >= target {
        tracing::debug!(goal_target = %target, "goal target reached");
        return Ok(Contribution {
            current: target,
            state: GoalState::Completed,
        });
    }

    Ok(Contribution {
        current: added,
        state: GoalState::Active,
    })
}
