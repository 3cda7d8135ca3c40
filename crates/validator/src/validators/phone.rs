//! Phone number validator for Brazilian numbers.
//!
//! A number is an area code (2 digits) plus an 8-digit landline or a
//! 9-digit mobile, i.e. 10 or 11 digits once formatting is stripped.

use crate::digits::count_digits;
use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates phone numbers by digit count.
///
/// Any formatting is accepted; only the digits are counted.
///
/// # Examples
///
/// ```
/// use castra_validator::validators::Phone;
/// use castra_validator::foundation::Validate;
///
/// let phone = Phone::brazil();
/// assert!(phone.validate("(11) 98765-4321").is_ok());
/// assert!(phone.validate("(11) 3333-4444").is_ok());
/// assert!(phone.validate("98765-4321").is_err());
///
/// // Mobile numbers only
/// let mobile = Phone::brazil().min_digits(11);
/// assert!(mobile.validate("(11) 3333-4444").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    min_digits: u8,
    max_digits: u8,
}

impl Phone {
    /// Landline or mobile with area code: 10 or 11 digits.
    #[must_use]
    pub fn brazil() -> Self {
        Self {
            min_digits: 10,
            max_digits: 11,
        }
    }

    /// Sets the minimum number of digits required.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_digits(mut self, min: u8) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_digits(mut self, max: u8) -> Self {
        self.max_digits = max;
        self
    }

    fn validate_digit_count(&self, count: usize) -> Result<(), ValidationError> {
        if count < self.min_digits as usize {
            return Err(ValidationError::new(
                "phone_too_few_digits",
                format!(
                    "Phone number must have at least {} digits (found {})",
                    self.min_digits, count
                ),
            )
            .with_param("min", self.min_digits.to_string())
            .with_param("actual", count.to_string()));
        }

        if count > self.max_digits as usize {
            return Err(ValidationError::new(
                "phone_too_many_digits",
                format!(
                    "Phone number must have at most {} digits (found {})",
                    self.max_digits, count
                ),
            )
            .with_param("max", self.max_digits.to_string())
            .with_param("actual", count.to_string()));
        }

        Ok(())
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::brazil()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.validate_digit_count(count_digits(input))
    }
}

// ============================================================================
// TESTS
// ============================================================================
