//! Input masks and display formatters
//!
//! A [`Mask`] reformats a value while it is being typed: only digits are
//! kept, extra digits are dropped, and separators appear only between digits.
//! The `format_*` functions render a complete stored value for display and
//! leave incomplete values as bare digits.
//!
//! ```
//! use castra_validator::mask::{Mask, format_phone};
//!
//! assert_eq!(Mask::Cpf.apply("5299822"), "529.982.2");
//! assert_eq!(Mask::Cpf.apply("52998224725"), "529.982.247-25");
//! assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::digits::digits_only as strip_mask;
use crate::digits::digits_only;

// ============================================================================
// PATTERNS
// ============================================================================

/// `#` marks a digit slot; every other character is a literal.
pub const CPF_PATTERN: &str = "###.###.###-##";
/// CNPJ display pattern.
pub const CNPJ_PATTERN: &str = "##.###.###/####-##";
/// RG display pattern.
pub const RG_PATTERN: &str = "##.###.###-#";
/// CEP display pattern.
pub const POSTAL_CODE_PATTERN: &str = "#####-###";

const PHONE_MAX_DIGITS: usize = 11;

/// Applies a `#`-placeholder pattern to the digits of `value`.
///
/// Output stops at the last digit, so an incomplete value never ends in a
/// separator, and digits beyond the pattern's slots are dropped.
///
/// ```
/// use castra_validator::mask::apply_pattern;
///
/// assert_eq!(apply_pattern("01310", "#####-###"), "01310");
/// assert_eq!(apply_pattern("013101", "#####-###"), "01310-1");
/// assert_eq!(apply_pattern("0131010099", "#####-###"), "01310-100");
/// ```
pub fn apply_pattern(value: &str, pattern: &str) -> String {
    let mut digits = value.chars().filter(char::is_ascii_digit).peekable();
    let mut out = String::with_capacity(pattern.len());

    for slot in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }

    out
}

// ============================================================================
// MASK
// ============================================================================

/// The masked fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mask {
    /// `###.###.###-##`
    Cpf,
    /// `##.###.###/####-##`
    Cnpj,
    /// `##.###.###-#`
    Rg,
    /// `#####-###`
    PostalCode,
    /// `(##) ####-####` or `(##) #####-####`
    Phone,
}

impl Mask {
    /// Every mask, in declaration order.
    pub const ALL: [Mask; 5] = [Mask::Cpf, Mask::Cnpj, Mask::Rg, Mask::PostalCode, Mask::Phone];

    /// Masks `raw` as it would appear while being typed.
    pub fn apply(self, raw: &str) -> String {
        match self {
            Mask::Cpf => apply_pattern(raw, CPF_PATTERN),
            Mask::Cnpj => apply_pattern(raw, CNPJ_PATTERN),
            Mask::Rg => apply_pattern(raw, RG_PATTERN),
            Mask::PostalCode => apply_pattern(raw, POSTAL_CODE_PATTERN),
            Mask::Phone => mask_phone(raw),
        }
    }

    /// Digit capacity of the mask.
    pub fn max_digits(self) -> usize {
        match self {
            Mask::Cpf => 11,
            Mask::Cnpj => 14,
            Mask::Rg => 9,
            Mask::PostalCode => 8,
            Mask::Phone => PHONE_MAX_DIGITS,
        }
    }

    /// Short lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Mask::Cpf => "cpf",
            Mask::Cnpj => "cnpj",
            Mask::Rg => "rg",
            Mask::PostalCode => "cep",
            Mask::Phone => "phone",
        }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Phone numbers change shape between 10 and 11 digits, so the hyphen is
/// placed relative to the end rather than by a fixed pattern.
fn mask_phone(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(PHONE_MAX_DIGITS).collect();

    if digits.len() <= 2 {
        return digits;
    }

    let (area, subscriber) = digits.split_at(2);
    if subscriber.len() <= 4 {
        return format!("({area}) {subscriber}");
    }

    let (head, tail) = subscriber.split_at(subscriber.len() - 4);
    format!("({area}) {head}-{tail}")
}

// ============================================================================
// DISPLAY FORMATTERS
// ============================================================================

/// Formats a complete pattern, or returns the bare digits when the digit
/// count does not match.
fn format_exact(value: &str, pattern: &str, len: usize) -> String {
    let digits = digits_only(value);
    if digits.len() == len {
        apply_pattern(&digits, pattern)
    } else {
        digits
    }
}

/// `52998224725` → `529.982.247-25`
pub fn format_cpf(value: &str) -> String {
    format_exact(value, CPF_PATTERN, 11)
}

/// `11222333000181` → `11.222.333/0001-81`
pub fn format_cnpj(value: &str) -> String {
    format_exact(value, CNPJ_PATTERN, 14)
}

/// `01310100` → `01310-100`
pub fn format_postal_code(value: &str) -> String {
    format_exact(value, POSTAL_CODE_PATTERN, 8)
}

/// Formats a 10-digit landline or 11-digit mobile number.
pub fn format_phone(value: &str) -> String {
    let digits = digits_only(value);
    match digits.len() {
        10 | 11 => mask_phone(&digits),
        _ => digits,
    }
}

// ============================================================================
// TESTS
// ============================================================================
