//! Percentage of one amount relative to another.

use rust_decimal::{Decimal, RoundingStrategy};

use rupiah_shared::MonetaryAmount;

/// Returns `part / whole * 100`.
///
/// The ratio is rounded half-up to four places before scaling, so the result
/// carries at most two decimal places. A zero `whole` yields zero.
#[must_use]
pub fn percent_of(part: MonetaryAmount, whole: MonetaryAmount) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }

    let ratio = (part.to_decimal() / whole.to_decimal())
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
    (ratio * Decimal::ONE_HUNDRED).normalize()
}
