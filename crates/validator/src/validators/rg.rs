//! RG (Registro Geral) validator
//!
//! RG numbering differs between issuing states and carries no checksum the
//! form can verify, so only the number of digits is checked.

use super::digit_count::DigitRange;
use crate::digits::count_digits;
use crate::foundation::{Validate, ValidationError};

/// Accepted RG lengths, formatting stripped.
pub const RG_DIGITS: DigitRange = DigitRange { min: 8, max: 9 };

crate::validator! {
    /// Validates an RG with 8 or 9 digits after stripping punctuation.
    pub Rg for str;
    rule(input) { RG_DIGITS.is_valid(input) }
    error(input) {
        ValidationError::digit_count(
            "rg_length",
            format!("{} to {}", RG_DIGITS.min, RG_DIGITS.max),
            count_digits(input),
        )
    }
    fn rg();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rg() {
        assert!(rg().validate("12.345.678-9").is_ok());
        assert!(rg().validate("12345678").is_ok());
        assert!(rg().validate("1234567").is_err());
        assert!(rg().validate("1234567890").is_err());
        assert!(rg().validate("").is_err());
    }

    #[test]
    fn test_rg_error_names_the_range() {
        let err = rg().validate("123").unwrap_err();
        assert_eq!(err.code, "rg_length");
        assert_eq!(err.param("expected"), Some("8 to 9"));
        assert_eq!(err.param("actual"), Some("3"));
    }
}
