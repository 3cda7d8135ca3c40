//! Password strength criteria
//!
//! Strength is reported criterion by criterion so a form can show which
//! requirement is still missing.

use serde::Serialize;

use crate::foundation::{Validate, ValidationError};

/// Characters that satisfy the "special character" criterion.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Which strength criteria a password meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PasswordCriteria {
    /// At least [`MIN_PASSWORD_LEN`] characters.
    pub length: bool,
    /// Contains an ASCII uppercase letter.
    pub uppercase: bool,
    /// Contains an ASCII lowercase letter.
    pub lowercase: bool,
    /// Contains an ASCII digit.
    pub digit: bool,
    /// Contains one of [`SPECIAL_CHARS`].
    pub special: bool,
}

impl PasswordCriteria {
    /// Evaluates every criterion against `password`.
    ///
    /// ```
    /// use castra_validator::validators::PasswordCriteria;
    ///
    /// let report = PasswordCriteria::evaluate("gatinho1");
    /// assert!(report.length && report.lowercase && report.digit);
    /// assert!(!report.uppercase);
    /// assert!(!report.is_strong());
    /// ```
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    /// True when every criterion holds.
    #[must_use]
    pub fn is_strong(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.digit && self.special
    }

    /// Names of the criteria that do not hold, in a fixed order.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.length, "length"),
            (self.uppercase, "uppercase"),
            (self.lowercase, "lowercase"),
            (self.digit, "digit"),
            (self.special, "special"),
        ]
        .into_iter()
        .filter_map(|(met, name)| (!met).then_some(name))
        .collect()
    }
}

/// Validates that a password meets every [`PasswordCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PasswordStrength;

impl Validate for PasswordStrength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let criteria = PasswordCriteria::evaluate(input);
        if criteria.is_strong() {
            return Ok(());
        }

        Err(ValidationError::new(
            "weak_password",
            "Password does not meet every strength criterion",
        )
        .with_param("missing", criteria.missing().join(",")))
    }
}

/// Factory for [`PasswordStrength`].
#[must_use]
pub const fn password_strength() -> PasswordStrength {
    PasswordStrength
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong() {
        assert!(password_strength().validate("Castra#2024").is_ok());
    }

    #[test]
    fn test_empty_is_never_strong() {
        let report = PasswordCriteria::evaluate("");
        assert_eq!(report, PasswordCriteria::default());
        assert!(password_strength().validate("").is_err());
    }

    #[test]
    fn test_missing_criteria() {
        let err = password_strength().validate("castra2024").unwrap_err();
        assert_eq!(err.param("missing"), Some("uppercase,special"));
    }

    #[test]
    fn test_special_set() {
        assert!(PasswordCriteria::evaluate("\"").special);
        assert!(PasswordCriteria::evaluate("|").special);
        assert!(!PasswordCriteria::evaluate("-").special);
        assert!(!PasswordCriteria::evaluate("_").special);
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(!PasswordCriteria::evaluate("Ação#1").length);
        assert!(PasswordCriteria::evaluate("Açãozinha").length);
    }
}
