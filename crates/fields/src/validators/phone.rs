//! Phone number validator.
//!
//! Accepts the loosely formatted numbers operators publish in system
//! information: an optional leading `+`, digits, and the usual separators.

use crate::error::FieldError;
use crate::foundation::Validate;

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates a dialable phone number.
///
/// Allowed characters are ASCII digits, spaces, dashes, dots and parentheses,
/// plus a single `+` in first position. Parentheses must balance, and the
/// digit count (separators excluded) must fall within the configured bounds,
/// `7..=15` by default.
///
/// # Examples
///
/// ```
/// use gbfs_fields::validators::Phone;
/// use gbfs_fields::foundation::Validate;
///
/// let phone = Phone::lenient();
/// assert!(phone.validate("+1 (415) 555-1234").is_ok());
/// assert!(phone.validate("030.1234.5678").is_ok());
/// assert!(phone.validate("555-12").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    min_digits: u8,
    max_digits: u8,
}

impl Phone {
    /// Creates a validator with the default `7..=15` digit bounds.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            min_digits: 7,
            max_digits: 15,
        }
    }

    /// Sets the minimum number of digits required.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min_digits(mut self, min: u8) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_digits(mut self, max: u8) -> Self {
        self.max_digits = max;
        self
    }

    fn reject(input: &str, reason: impl Into<String>) -> FieldError {
        FieldError::InvalidPhoneNumber {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::lenient()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), FieldError> {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.');
        if let Some(bad) = input.chars().find(|c| !allowed(*c)) {
            return Err(Self::reject(input, format!("unexpected character '{bad}'")));
        }

        if input.rfind('+').is_some_and(|pos| pos != 0) {
            return Err(Self::reject(input, "'+' may only lead the number"));
        }

        let mut depth = 0_i32;
        for c in input.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                break;
            }
        }
        if depth != 0 {
            return Err(Self::reject(input, "unbalanced parentheses"));
        }

        let digits = input.chars().filter(char::is_ascii_digit).count();
        if digits < usize::from(self.min_digits) || digits > usize::from(self.max_digits) {
            return Err(Self::reject(
                input,
                format!(
                    "expected {} to {} digits, found {digits}",
                    self.min_digits, self.max_digits
                ),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
