//! Property-based tests for amount formatting.
//!
//! - Display strings parse back into the amount they came from
//! - Digit filtering is idempotent
//! - Formatting never panics on arbitrary input

use proptest::prelude::*;

use rupiah_shared::MonetaryAmount;
use rupiah_shared::config::TypingStyle;

use super::digits::{parse_digits, strip_non_digits};
use super::formatter::{RupiahFormatter, format_as_typed, format_for_display};
use super::grouping::GroupingStyle;

/// Strategy to generate one of the built-in grouping styles.
fn grouping_style() -> impl Strategy<Value = GroupingStyle> {
    prop_oneof![
        Just(GroupingStyle::ID_ID),
        Just(GroupingStyle::EN_US),
        Just(GroupingStyle::NONE),
    ]
}

/// Strategy to generate text a user might paste into an amount field.
fn noisy_input() -> impl Strategy<Value = String> {
    "[0-9Rp., a-z\\-]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount N, parsing the digits of its display string yields N.
    #[test]
    fn prop_display_round_trip(units in any::<u64>()) {
        let display = format_for_display(units);
        prop_assert_eq!(parse_digits(&display), MonetaryAmount::new(units));
    }

    /// The round trip holds for every built-in grouping style.
    #[test]
    fn prop_display_round_trip_any_grouping(
        units in any::<u64>(),
        grouping in grouping_style(),
    ) {
        let formatter = RupiahFormatter::new("Rp. ", grouping).unwrap();
        let display = formatter.display(units);
        prop_assert_eq!(parse_digits(&display), MonetaryAmount::new(units));
    }

    /// Display strings always carry the prefix and nothing but digits and
    /// separators after it.
    #[test]
    fn prop_display_shape(input in noisy_input()) {
        let display = format_for_display(input.as_str());
        let rest = display.strip_prefix("Rp. ");
        prop_assert!(rest.is_some());
        prop_assert!(rest.unwrap().chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    /// Stripping non-digits twice is the same as stripping once.
    #[test]
    fn prop_strip_idempotent(input in ".*") {
        let once = strip_non_digits(&input);
        prop_assert_eq!(strip_non_digits(&once), once);
    }

    /// Re-applying the live-typing filter to its own output is a no-op.
    #[test]
    fn prop_typed_idempotent(input in noisy_input()) {
        let once = format_as_typed(&input);
        prop_assert_eq!(format_as_typed(&once), once);

        let grouped = RupiahFormatter::default().with_typing_style(TypingStyle::Grouped);
        let once = grouped.typed(&input);
        prop_assert_eq!(grouped.typed(&once), once);
    }

    /// Live-typing output never carries the prefix.
    #[test]
    fn prop_typed_has_no_prefix(input in noisy_input()) {
        prop_assert!(!format_as_typed(&input).starts_with("Rp"));
    }
}
