//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators are plain values: the same input always yields the same
/// result and no state is carried between calls.
///
/// # Examples
///
/// ```
/// use castra_validator::foundation::{Validate, ValidationError};
///
/// struct Uppercase;
///
/// impl Validate for Uppercase {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().all(|c| !c.is_lowercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("uppercase", "Must be uppercase"))
///         }
///     }
/// }
///
/// assert!(Uppercase.validate("CÃO").is_ok());
/// assert!(Uppercase.validate("gato").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so that `str` can be validated directly.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Shorthand for `validate(input).is_ok()`.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Validate`] implementation.
///
/// # Examples
///
/// ```
/// use castra_validator::prelude::*;
///
/// // An optional e-mail: blank passes, anything else must be well formed.
/// let validator = Email.allow_blank();
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("tutor@example.com").is_ok());
/// assert!(validator.validate("tutor@").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Replaces the error message on failure.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Accepts empty input without running the inner validator.
    fn allow_blank(self) -> AllowBlank<Self>
    where
        Self: Validate<Input = str>,
    {
        AllowBlank::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::{AllowBlank, And, Or, WithMessage};

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysValid.is_valid("test"));
    }
}
