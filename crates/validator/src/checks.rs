//! Boolean checks over raw field values.
//!
//! Each function answers "is this value acceptable?" for one form field and
//! delegates to the matching validator in [`validators`](crate::validators).
//! Optional fields (e-mail, microchip, URL) accept the empty string.
//!
//! ```
//! use castra_validator::checks;
//!
//! assert!(checks::is_valid_national_id11("529.982.247-25"));
//! assert!(checks::is_valid_email(""));
//! assert!(!checks::is_valid_phone("3333-4444"));
//! ```

use chrono::NaiveDate;

use crate::foundation::{Validate, ValidateExt};
use crate::validators::{
    AbsoluteUrl, Cnpj, Cpf, DateDmy, Email, InRange, MaxLength, MinLength, Microchip,
    MinimumAge, Numeric, PasswordStrength, Phone, PostalCode, Required, Rg, Weight,
};

/// True when a value is present and not blank.
pub fn is_required(value: Option<&str>) -> bool {
    value.is_some_and(|v| Required.is_valid(v))
}

/// True for an empty value or a well-formed address.
pub fn is_valid_email(value: &str) -> bool {
    Email.allow_blank().is_valid(value)
}

/// True for a number with 10 or 11 digits, formatted or not.
pub fn is_valid_phone(value: &str) -> bool {
    Phone::brazil().is_valid(value)
}

/// True for a CEP with exactly 8 digits.
pub fn is_valid_postal_code(value: &str) -> bool {
    PostalCode.is_valid(value)
}

/// True for a CPF with valid check digits.
pub fn is_valid_national_id11(value: &str) -> bool {
    Cpf.is_valid(value)
}

/// True for a CNPJ with valid check digits.
pub fn is_valid_org_id14(value: &str) -> bool {
    Cnpj.is_valid(value)
}

/// True for an RG with 8 or 9 digits.
pub fn is_valid_national_id2(value: &str) -> bool {
    Rg.is_valid(value)
}

/// True for an empty value or a 15-digit microchip number.
pub fn is_valid_microchip(value: &str) -> bool {
    Microchip.allow_blank().is_valid(value)
}

/// True for a weight in kilograms within `(0, 100]`.
pub fn is_valid_weight(value: &str) -> bool {
    Weight.is_valid(value)
}

/// True for an existing calendar date written `DD/MM/YYYY`.
pub fn is_valid_date_dmy(value: &str) -> bool {
    DateDmy.is_valid(value)
}

/// True for an empty value or an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    AbsoluteUrl.allow_blank().is_valid(value)
}

/// True for a non-empty run of ASCII digits.
pub fn is_numeric(value: &str) -> bool {
    Numeric.is_valid(value)
}

/// True for a non-empty value with at least `min` characters.
pub fn has_min_length(value: &str, min: usize) -> bool {
    MinLength::new(min).is_valid(value)
}

/// True for a value with at most `max` characters.
pub fn has_max_length(value: &str, max: usize) -> bool {
    MaxLength::new(max).is_valid(value)
}

/// True when `min <= value <= max`; NaN is never in range.
pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    InRange::new(min, max).is_valid(&value)
}

/// True when the `DD/MM/YYYY` birth date is at least `years` old on `today`.
pub fn has_minimum_age(birth: &str, years: u32, today: NaiveDate) -> bool {
    MinimumAge::new(years, today).is_valid(birth)
}

/// True when every password strength criterion holds.
pub fn is_strong_password(value: &str) -> bool {
    PasswordStrength.is_valid(value)
}
