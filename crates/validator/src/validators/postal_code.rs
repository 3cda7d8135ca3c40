//! CEP (Brazilian postal code) validator

use crate::digits::count_digits;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates a CEP by digit count: `01310-100` and `01310100` pass.
    ///
    /// Whether the code exists is the address lookup's business, not ours.
    pub PostalCode for str;
    rule(input) { count_digits(input) == 8 }
    error(input) { ValidationError::digit_count("cep_length", "8", count_digits(input)) }
    fn postal_code();
}
