//! Animal weight validator
//!
//! Weights are typed in kilograms with either decimal separator
//! (`4,5` or `4.5`) and must lie in `(0, 100]`.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorKind, Validate, ValidationError};

static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").unwrap()
});

/// Heaviest weight the form accepts, in kilograms.
pub const MAX_WEIGHT_KG: f64 = 100.0;

/// Parses a decimal written with `.` or `,` as separator.
///
/// Surrounding whitespace is ignored and the first comma is read as the
/// decimal point. Anything else that is not a plain decimal (exponents,
/// thousands separators, units, `NaN`) is an `InvalidFormat` error.
///
/// ```
/// use castra_validator::validators::parse_decimal;
///
/// assert_eq!(parse_decimal("4,5").unwrap(), 4.5);
/// assert_eq!(parse_decimal(" 12.25 ").unwrap(), 12.25);
/// assert!(parse_decimal("12kg").is_err());
/// assert!(parse_decimal("1.234,5").is_err());
/// ```
pub fn parse_decimal(input: &str) -> Result<f64, ValidationError> {
    let normalized = input.trim().replacen(',', ".", 1);

    if !DECIMAL_REGEX.is_match(&normalized) {
        return Err(ValidationError::invalid_format("", "decimal number"));
    }

    normalized
        .parse::<f64>()
        .map_err(|_| ValidationError::invalid_format("", "decimal number"))
}

/// Validates an animal weight in kilograms: a decimal in `(0, 100]`.
///
/// # Examples
///
/// ```
/// use castra_validator::validators::Weight;
/// use castra_validator::foundation::{ErrorKind, Validate};
///
/// assert!(Weight.validate("12,5").is_ok());
/// assert!(Weight.validate("100").is_ok());
/// assert_eq!(Weight.validate("0").unwrap_err().kind, ErrorKind::OutOfRange);
/// assert_eq!(Weight.validate("abc").unwrap_err().kind, ErrorKind::InvalidFormat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Weight;

impl Validate for Weight {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let kg = parse_decimal(input)?;

        if kg > 0.0 && kg <= MAX_WEIGHT_KG {
            Ok(())
        } else {
            Err(ValidationError::new(
                "weight_out_of_range",
                format!("Weight must be greater than 0 and at most {MAX_WEIGHT_KG} kg"),
            )
            .with_param("actual", kg.to_string())
            .with_kind(ErrorKind::OutOfRange))
        }
    }
}

/// Factory for [`Weight`].
#[must_use]
pub const fn weight() -> Weight {
    Weight
}
