//! CPF (Cadastro de Pessoas Físicas) validator
//!
//! An 11-digit individual taxpayer number whose last two digits are
//! modulus-11 check digits over the preceding ones.

use crate::digits::{all_same, digit_values};
use crate::foundation::{Validate, ValidationError};

const CPF_LEN: usize = 11;

/// Check digit for a CPF prefix.
///
/// Weights run from `prefix.len() + 1` down to 2. The weighted sum times ten,
/// modulo 11, is the digit; a remainder of 10 maps to 0.
pub(crate) fn check_digit(prefix: &[u32]) -> u32 {
    let top = u32::try_from(prefix.len()).unwrap_or(u32::MAX).saturating_add(1);
    let sum: u32 = prefix
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

/// Validates a CPF, formatted (`529.982.247-25`) or bare (`52998224725`).
///
/// Numbers made of one repeated digit pass the checksum but are never
/// issued, so they are rejected with their own code.
///
/// # Examples
///
/// ```
/// use castra_validator::validators::Cpf;
/// use castra_validator::foundation::Validate;
///
/// assert!(Cpf.validate("529.982.247-25").is_ok());
/// assert_eq!(Cpf.validate("529.982.247-24").unwrap_err().code, "cpf_checksum");
/// assert_eq!(Cpf.validate("000.000.000-00").unwrap_err().code, "cpf_repeated_digits");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cpf;

impl Validate for Cpf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits = digit_values(input);

        if digits.len() != CPF_LEN {
            return Err(ValidationError::digit_count(
                "cpf_length",
                CPF_LEN.to_string(),
                digits.len(),
            ));
        }

        if all_same(&digits) {
            return Err(ValidationError::new(
                "cpf_repeated_digits",
                "CPF cannot consist of a single repeated digit",
            ));
        }

        let first = check_digit(&digits[..9]);
        let second = check_digit(&digits[..10]);
        if first != digits[9] || second != digits[10] {
            return Err(
                ValidationError::new("cpf_checksum", "CPF check digits do not match")
                    .with_param("expected", format!("{first}{second}"))
                    .with_param("actual", format!("{}{}", digits[9], digits[10])),
            );
        }

        Ok(())
    }
}

/// Factory for [`Cpf`].
#[must_use]
pub const fn cpf() -> Cpf {
    Cpf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        for value in ["52998224725", "11144477735", "12345678909", "00000000191"] {
            assert!(Cpf.validate(value).is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn test_formatting_is_ignored() {
        assert!(Cpf.validate("529.982.247-25").is_ok());
        assert!(Cpf.validate(" 529 982 247 25 ").is_ok());
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), 2);
        assert_eq!(check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7, 2]), 5);
    }

    #[test]
    fn test_wrong_length() {
        let err = Cpf.validate("5299822472").unwrap_err();
        assert_eq!(err.code, "cpf_length");
        assert_eq!(err.param("actual"), Some("10"));
        assert_eq!(Cpf.validate("").unwrap_err().code, "cpf_length");
        assert_eq!(Cpf.validate("529982247250").unwrap_err().code, "cpf_length");
    }

    #[test]
    fn test_repeated_digits() {
        for d in 0..=9 {
            let value = d.to_string().repeat(11);
            assert_eq!(
                Cpf.validate(&value).unwrap_err().code,
                "cpf_repeated_digits"
            );
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        let err = Cpf.validate("52998224724").unwrap_err();
        assert_eq!(err.code, "cpf_checksum");
        assert_eq!(err.param("expected"), Some("25"));
        assert_eq!(err.param("actual"), Some("24"));
    }
}
