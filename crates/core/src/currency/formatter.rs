//! Display and live-typing formatting.

use rupiah_shared::config::{FormatterConfig, TypingStyle};
use rupiah_shared::{AppError, AppResult, MonetaryAmount};

use super::digits::{parse_digits, strip_non_digits, trim_leading_zeros};
use super::grouping::GroupingStyle;

/// An amount as it arrives from a form or an API payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountInput {
    /// A numeric value.
    Number(u64),
    /// Text that may contain digits mixed with anything else.
    Text(String),
    /// No value at all.
    Absent,
}

impl AmountInput {
    /// Resolves the input to an amount, degrading to zero.
    #[must_use]
    pub fn resolve(&self) -> MonetaryAmount {
        match self {
            Self::Number(units) => MonetaryAmount::new(*units),
            Self::Text(text) => {
                let amount = parse_digits(text);
                if amount.is_zero() {
                    tracing::trace!(input = %text, "amount text resolved to zero");
                }
                amount
            }
            Self::Absent => MonetaryAmount::ZERO,
        }
    }
}

impl From<u64> for AmountInput {
    fn from(units: u64) -> Self {
        Self::Number(units)
    }
}

impl From<MonetaryAmount> for AmountInput {
    fn from(amount: MonetaryAmount) -> Self {
        Self::Number(amount.units())
    }
}

impl From<&str> for AmountInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<AmountInput>> From<Option<T>> for AmountInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Formats amounts for display and for fields being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RupiahFormatter {
    prefix: String,
    grouping: GroupingStyle,
    typing_style: TypingStyle,
}

impl Default for RupiahFormatter {
    fn default() -> Self {
        Self {
            prefix: "Rp. ".to_string(),
            grouping: GroupingStyle::ID_ID,
            typing_style: TypingStyle::Bare,
        }
    }
}

impl RupiahFormatter {
    /// Creates a formatter with the given prefix and grouping.
    ///
    /// The prefix must not contain digits, so that display strings parse
    /// back into the amount they were made from.
    pub fn new(prefix: impl Into<String>, grouping: GroupingStyle) -> AppResult<Self> {
        let prefix = prefix.into();
        if prefix.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::Validation(format!(
                "currency prefix cannot contain digits: {prefix:?}"
            )));
        }

        Ok(Self {
            prefix,
            grouping,
            typing_style: TypingStyle::Bare,
        })
    }

    /// Builds a formatter from configuration.
    pub fn from_config(config: &FormatterConfig) -> AppResult<Self> {
        Ok(Self::new(config.prefix.clone(), config.locale.into())?
            .with_typing_style(config.typing_style))
    }

    /// Sets how a focused field renders typed input.
    #[must_use]
    pub fn with_typing_style(mut self, typing_style: TypingStyle) -> Self {
        self.typing_style = typing_style;
        self
    }

    /// Returns the display prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the grouping style.
    #[must_use]
    pub const fn grouping(&self) -> GroupingStyle {
        self.grouping
    }

    /// Returns the live-typing style.
    #[must_use]
    pub const fn typing_style(&self) -> TypingStyle {
        self.typing_style
    }

    /// Renders any amount input as a display string.
    ///
    /// Absent or unparseable input renders as zero. Never fails.
    #[must_use]
    pub fn display(&self, input: impl Into<AmountInput>) -> String {
        self.display_amount(input.into().resolve())
    }

    /// Renders an amount as `prefix + grouped digits`.
    #[must_use]
    pub fn display_amount(&self, amount: MonetaryAmount) -> String {
        format!("{}{}", self.prefix, self.grouping.group(&amount.to_string()))
    }

    /// Renders what the user is typing into a focused amount field.
    ///
    /// Non-digits are dropped and the prefix is never added. Empty input
    /// stays empty so the field can be cleared.
    #[must_use]
    pub fn typed(&self, partial: &str) -> String {
        let digits = strip_non_digits(partial);
        let digits = trim_leading_zeros(&digits);
        match self.typing_style {
            TypingStyle::Bare => digits.to_string(),
            TypingStyle::Grouped => self.grouping.group(digits),
        }
    }
}

/// Formats an amount with the default `"Rp. "` formatter.
///
/// ```
/// use rupiah_core::format_for_display;
///
/// assert_eq!(format_for_display(1_000_000_u64), "Rp. 1.000.000");
/// assert_eq!(format_for_display("abc"), "Rp. 0");
/// assert_eq!(format_for_display(None::<u64>), "Rp. 0");
/// ```
#[must_use]
pub fn format_for_display(input: impl Into<AmountInput>) -> String {
    RupiahFormatter::default().display(input)
}

/// Filters live input with the default formatter.
///
/// ```
/// use rupiah_core::format_as_typed;
///
/// assert_eq!(format_as_typed("Rp1.000"), "1000");
/// assert_eq!(format_as_typed("Rp. "), "");
/// ```
#[must_use]
pub fn format_as_typed(partial: &str) -> String {
    RupiahFormatter::default().typed(partial)
}
