//! OR combinator - logical disjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// Succeeds as soon as one side passes. When both fail, the returned error
/// carries both failures as nested errors and inherits the left side's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_kind(left_error.kind)
                        .with_nested_error(left_error)
                        .with_nested_error(right_error))
                }
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::digit_count;

    #[test]
    fn test_or_either_side() {
        let validator = or(digit_count(10), digit_count(11));
        assert!(validator.validate("1133334444").is_ok());
        assert!(validator.validate("11987654321").is_ok());
    }

    #[test]
    fn test_or_nests_both_failures() {
        let validator = or(digit_count(10), digit_count(11));
        let err = validator.validate("123").unwrap_err();
        assert_eq!(err.code, "or_failed");
        assert_eq!(err.nested.len(), 2);
    }
}
