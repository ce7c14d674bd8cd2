//! Amount input field state.
//!
//! While focused the field holds the live-typing rendering (never the
//! prefix); once blurred it holds the full display string. Either way the
//! amount is recovered by re-extracting the digits.

use rupiah_shared::{AppError, AppResult, MonetaryAmount};

use super::digits::{parse_digits, strip_non_digits};
use super::formatter::RupiahFormatter;

/// State of a single amount input control.
#[derive(Debug, Clone)]
pub struct AmountField {
    formatter: RupiahFormatter,
    text: String,
    focused: bool,
}

impl AmountField {
    /// Creates an empty, unfocused field.
    #[must_use]
    pub fn new(formatter: RupiahFormatter) -> Self {
        Self {
            formatter,
            text: String::new(),
            focused: false,
        }
    }

    /// Creates an unfocused field prefilled with an existing amount.
    #[must_use]
    pub fn from_amount(formatter: RupiahFormatter, amount: MonetaryAmount) -> Self {
        let text = formatter.display_amount(amount);
        Self {
            formatter,
            text,
            focused: false,
        }
    }

    /// Current text of the control.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the control has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the field contains no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        strip_non_digits(&self.text).is_empty()
    }

    /// Switches to editing text.
    pub fn on_focus(&mut self) {
        self.focused = true;
        self.text = self.formatter.typed(&self.text);
    }

    /// Applies a raw value from the control, e.g. after a keystroke or paste.
    pub fn on_input(&mut self, raw: &str) {
        self.focused = true;
        self.text = self.formatter.typed(raw);
    }

    /// Switches to the display string. An empty field stays empty.
    pub fn on_blur(&mut self) {
        self.focused = false;
        if !self.is_empty() {
            self.text = self.formatter.display_amount(self.amount());
        }
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The amount currently entered, zero when empty.
    #[must_use]
    pub fn amount(&self) -> MonetaryAmount {
        parse_digits(&self.text)
    }

    /// Returns the amount to submit.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the amount is not greater than zero.
    pub fn submit(&self) -> AppResult<MonetaryAmount> {
        let amount = self.amount();
        if amount.is_zero() {
            return Err(AppError::Validation(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(amount)
    }
}

impl Default for AmountField {
    fn default() -> Self {
        Self::new(RupiahFormatter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rupiah_shared::config::TypingStyle;

    #[test]
    fn test_new_field_is_empty() {
        let field = AmountField::default();
        assert_eq!(field.text(), "");
        assert!(field.is_empty());
        assert!(!field.is_focused());
        assert_eq!(field.amount(), MonetaryAmount::ZERO);
    }

    #[test]
    fn test_typing_keeps_bare_digits() {
        let mut field = AmountField::default();
        field.on_input("1");
        field.on_input("15");
        field.on_input("15a0");
        assert_eq!(field.text(), "150");
        assert!(field.is_focused());
        assert_eq!(field.amount(), MonetaryAmount::new(150));
    }

    #[test]
    fn test_blur_adds_prefix_and_focus_removes_it() {
        let mut field = AmountField::default();
        field.on_input("2500000");
        field.on_blur();
        assert_eq!(field.text(), "Rp. 2.500.000");
        assert_eq!(field.amount(), MonetaryAmount::new(2_500_000));

        field.on_focus();
        assert_eq!(field.text(), "2500000");
    }

    #[test]
    fn test_blur_on_empty_field_stays_empty() {
        let mut field = AmountField::default();
        field.on_input("abc");
        field.on_blur();
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_grouped_typing_style() {
        let formatter = RupiahFormatter::default().with_typing_style(TypingStyle::Grouped);
        let mut field = AmountField::new(formatter);
        field.on_input("1000");
        assert_eq!(field.text(), "1.000");
        field.on_input("1.0000");
        assert_eq!(field.text(), "10.000");
        assert_eq!(field.amount(), MonetaryAmount::new(10_000));
    }

    #[test]
    fn test_prefilled_field() {
        let field = AmountField::from_amount(RupiahFormatter::default(), MonetaryAmount::new(750_000));
        assert_eq!(field.text(), "Rp. 750.000");
        assert_eq!(field.submit().unwrap(), MonetaryAmount::new(750_000));
    }

    #[test]
    fn test_submit_rejects_zero() {
        let mut field = AmountField::default();
        assert!(field.submit().is_err());

        field.on_input("0");
        let err = field.submit().unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_clear() {
        let mut field = AmountField::default();
        field.on_input("99");
        field.clear();
        assert!(field.is_empty());
    }
}
