//! Digit-count validators
//!
//! These look only at the ASCII digits of the input, so punctuation such as
//! `01310-100` or `(11) 3333-4444` never affects the outcome.

use crate::digits::count_digits;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that the input holds exactly `count` digits once
    /// formatting is stripped.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DigitCount { count: usize } for str;
    rule(self, input) { count_digits(input) == self.count }
    error(self, input) {
        ValidationError::digit_count("digit_count", self.count.to_string(), count_digits(input))
    }
    fn digit_count(count: usize);
}

crate::validator! {
    /// Validates that the number of digits lies in `min..=max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DigitRange { min: usize, max: usize } for str;
    rule(self, input) {
        let n = count_digits(input);
        n >= self.min && n <= self.max
    }
    error(self, input) {
        ValidationError::digit_count(
            "digit_range",
            format!("{} to {}", self.min, self.max),
            count_digits(input),
        )
    }
    fn digit_range(min: usize, max: usize);
}

crate::validator! {
    /// Validates that the input is a non-empty run of ASCII digits.
    ///
    /// Used for house numbers, where no punctuation is accepted.
    pub Numeric for str;
    rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { ValidationError::invalid_format("", "digits only") }
    fn numeric();
}
