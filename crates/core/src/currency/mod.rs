//! Amount formatting and parsing.
//!
//! Converts between the three shapes an amount takes in a form: the
//! `MonetaryAmount` value, the canonical digit string, and the display
//! string (`"Rp. 1.000.000"`). None of these conversions fail; anything
//! unparseable degrades to zero.

pub mod digits;
pub mod field;
pub mod formatter;
pub mod grouping;
pub mod percent;

#[cfg(test)]
mod props;

pub use digits::{parse_digits, strip_non_digits};
pub use field::AmountField;
pub use formatter::{AmountInput, RupiahFormatter, format_as_typed, format_for_display};
pub use grouping::GroupingStyle;
pub use percent::percent_of;
