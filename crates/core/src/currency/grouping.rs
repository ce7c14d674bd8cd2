//! Thousands grouping styles.

use rupiah_shared::config::LocaleSetting;
use rupiah_shared::{AppError, AppResult};

/// How the digits of an amount are split into groups for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingStyle {
    separator: Option<char>,
    group_size: usize,
}

impl GroupingStyle {
    /// Indonesian style: `1.000.000`.
    pub const ID_ID: Self = Self {
        separator: Some('.'),
        group_size: 3,
    };

    /// US style: `1,000,000`.
    pub const EN_US: Self = Self {
        separator: Some(','),
        group_size: 3,
    };

    /// No grouping: `1000000`.
    pub const NONE: Self = Self {
        separator: None,
        group_size: 3,
    };

    /// Creates a custom grouping style.
    ///
    /// The separator must not be a digit, otherwise grouped output could not
    /// be parsed back into the same amount.
    pub fn new(separator: char, group_size: usize) -> AppResult<Self> {
        if separator.is_ascii_digit() {
            return Err(AppError::Validation(format!(
                "grouping separator cannot be a digit: {separator:?}"
            )));
        }
        if group_size == 0 {
            return Err(AppError::Validation(
                "group size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            separator: Some(separator),
            group_size,
        })
    }

    /// Returns the separator, if any.
    #[must_use]
    pub const fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Returns the number of digits per group.
    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Inserts separators into a string of ASCII digits, counting groups
    /// from the right.
    #[must_use]
    pub fn group(&self, digits: &str) -> String {
        let Some(separator) = self.separator else {
            return digits.to_string();
        };
        let size = self.group_size;
        if digits.len() <= size {
            return digits.to_string();
        }

        let lead = digits.len() % size;
        let mut out = String::with_capacity(digits.len() + digits.len() / size);
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i + size - lead) % size == 0 {
                out.push(separator);
            }
            out.push(ch);
        }
        out
    }
}

impl Default for GroupingStyle {
    fn default() -> Self {
        Self::ID_ID
    }
}

impl From<LocaleSetting> for GroupingStyle {
    fn from(locale: LocaleSetting) -> Self {
        match locale {
            LocaleSetting::IdId => Self::ID_ID,
            LocaleSetting::EnUs => Self::EN_US,
            LocaleSetting::Ungrouped => Self::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", "0")]
    #[case("999", "999")]
    #[case("1000", "1.000")]
    #[case("100000", "100.000")]
    #[case("1000000", "1.000.000")]
    #[case("12345678", "12.345.678")]
    fn test_group_id(#[case] digits: &str, #[case] expected: &str) {
        assert_eq!(GroupingStyle::ID_ID.group(digits), expected);
    }

    #[test]
    fn test_group_en() {
        assert_eq!(GroupingStyle::EN_US.group("1234567"), "1,234,567");
    }

    #[test]
    fn test_group_none() {
        assert_eq!(GroupingStyle::NONE.group("1234567"), "1234567");
    }

    #[test]
    fn test_group_custom_size() {
        let style = GroupingStyle::new(' ', 4).unwrap();
        assert_eq!(style.group("123456789"), "1 2345 6789");
        assert_eq!(style.separator(), Some(' '));
        assert_eq!(style.group_size(), 4);
    }

    #[test]
    fn test_new_rejects_digit_separator() {
        assert!(GroupingStyle::new('0', 3).is_err());
    }

    #[test]
    fn test_new_rejects_zero_group_size() {
        assert!(GroupingStyle::new('.', 0).is_err());
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(GroupingStyle::from(LocaleSetting::IdId), GroupingStyle::ID_ID);
        assert_eq!(GroupingStyle::from(LocaleSetting::EnUs), GroupingStyle::EN_US);
        assert_eq!(
            GroupingStyle::from(LocaleSetting::Ungrouped),
            GroupingStyle::NONE
        );
        assert_eq!(GroupingStyle::default(), GroupingStyle::ID_ID);
    }
}
