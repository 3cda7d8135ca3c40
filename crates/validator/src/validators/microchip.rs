//! Animal microchip validator

use crate::digits::count_digits;
use crate::foundation::ValidationError;

/// Digits in an ISO 11784 animal identification number.
pub const MICROCHIP_DIGITS: usize = 15;

crate::validator! {
    /// Validates a 15-digit microchip number.
    ///
    /// The microchip field is optional; combine with
    /// [`allow_blank`](crate::foundation::ValidateExt::allow_blank) to accept
    /// an empty value.
    pub Microchip for str;
    rule(input) { count_digits(input) == MICROCHIP_DIGITS }
    error(input) {
        ValidationError::digit_count("microchip_length", "15", count_digits(input))
    }
    fn microchip();
}
