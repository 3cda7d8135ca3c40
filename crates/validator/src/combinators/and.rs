//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass. The error of the first failing validator is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use castra_validator::prelude::*;
///
/// let validator = min_length(3).and(max_length(10));
/// assert!(validator.validate("Thor").is_ok());
/// assert!(validator.validate("Lu").is_err());
/// assert!(validator.validate("Bartholomew I").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{MaxLength, MinLength};

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(MinLength::new(3), MaxLength::new(10));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_and_returns_first_failure() {
        let validator = and(MinLength::new(3), MaxLength::new(1));
        let err = validator.validate("hi").unwrap_err();
        assert_eq!(err.code, "min_length");

        let err = validator.validate("hello").unwrap_err();
        assert_eq!(err.code, "max_length");
    }
}
