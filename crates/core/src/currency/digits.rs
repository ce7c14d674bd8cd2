//! Canonical digit strings.

use rupiah_shared::MonetaryAmount;

/// Removes every character that is not an ASCII digit.
///
/// Idempotent: `strip_non_digits(&strip_non_digits(s)) == strip_non_digits(s)`.
#[must_use]
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Parses the digits of `input` as a base-10 amount.
///
/// Returns zero when no digits remain or the digits overflow `u64`.
#[must_use]
pub fn parse_digits(input: &str) -> MonetaryAmount {
    let digits = strip_non_digits(input);
    if digits.is_empty() {
        return MonetaryAmount::ZERO;
    }

    match digits.parse::<u64>() {
        Ok(units) => MonetaryAmount::new(units),
        Err(_) => {
            tracing::trace!(len = digits.len(), "digit string overflows, using zero");
            MonetaryAmount::ZERO
        }
    }
}

/// Drops leading zeros, keeping a single `0` for an all-zero string.
pub(crate) fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    }
}
