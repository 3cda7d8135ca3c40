//! String length validators
//!
//! Length is measured in Unicode scalar values, so `"Zé"` has length 2.

use crate::foundation::ValidationError;

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    ///
    /// Empty input always fails, even when `min` is zero.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { !input.is_empty() && input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, input.chars().count()) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at most `max` characters.
    ///
    /// Empty input always passes.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length("", self.max, input.chars().count()) }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
