//! Required-field validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a field was filled in.
    ///
    /// A value counts as filled when something other than whitespace
    /// remains after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use castra_validator::validators::Required;
    /// use castra_validator::foundation::Validate;
    ///
    /// assert!(Required.validate("Rex").is_ok());
    /// assert!(Required.validate(" \t").is_err());
    /// ```
    pub Required for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::required("") }
    fn required();
}
