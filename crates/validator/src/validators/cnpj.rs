//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validator

use crate::digits::{all_same, digit_values};
use crate::foundation::{Validate, ValidationError};

const CNPJ_LEN: usize = 14;

/// Check digit for a CNPJ prefix.
///
/// Weights 2..=9 are applied from the rightmost digit leftwards, wrapping
/// back to 2 after 9. A remainder below 2 gives 0, otherwise `11 - r`.
pub(crate) fn check_digit(prefix: &[u32]) -> u32 {
    let sum: u32 = prefix
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Validates a CNPJ, formatted (`11.222.333/0001-81`) or bare.
///
/// # Examples
///
/// ```
/// use castra_validator::validators::Cnpj;
/// use castra_validator::foundation::Validate;
///
/// assert!(Cnpj.validate("11.222.333/0001-81").is_ok());
/// assert!(Cnpj.validate("11.222.333/0001-80").is_err());
/// assert!(Cnpj.validate("11111111111111").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cnpj;

impl Validate for Cnpj {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits = digit_values(input);

        if digits.len() != CNPJ_LEN {
            return Err(ValidationError::digit_count(
                "cnpj_length",
                CNPJ_LEN.to_string(),
                digits.len(),
            ));
        }

        if all_same(&digits) {
            return Err(ValidationError::new(
                "cnpj_repeated_digits",
                "CNPJ cannot consist of a single repeated digit",
            ));
        }

        let first = check_digit(&digits[..12]);
        let second = check_digit(&digits[..13]);
        if first != digits[12] || second != digits[13] {
            return Err(
                ValidationError::new("cnpj_checksum", "CNPJ check digits do not match")
                    .with_param("expected", format!("{first}{second}"))
                    .with_param("actual", format!("{}{}", digits[12], digits[13])),
            );
        }

        Ok(())
    }
}

/// Factory for [`Cnpj`].
#[must_use]
pub const fn cnpj() -> Cnpj {
    Cnpj
}
