//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// The original error is kept as a nested error; code, field, kind and
/// severity are carried over so callers can still branch on them.
///
/// # Examples
///
/// ```
/// use castra_validator::prelude::*;
///
/// let validator = Cpf.with_message("CPF inválido.");
/// let err = validator.validate("111.111.111-11").unwrap_err();
/// assert_eq!(err.message, "CPF inválido.");
/// assert_eq!(err.code, "cpf_repeated_digits");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let mut error = ValidationError::new(original.code.clone(), Cow::Owned(self.message.clone()))
                .with_kind(original.kind)
                .with_severity(original.severity);
            error.field.clone_from(&original.field);
            error.with_nested_error(original)
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
