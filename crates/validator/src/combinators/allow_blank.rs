//! ALLOW_BLANK combinator - optional text fields

use crate::foundation::{Validate, ValidationError};

/// Makes a string validator optional: empty input passes untouched.
///
/// Form fields arrive as strings, so "absent" means the empty string.
/// Whitespace-only input is not blank here and still reaches the inner
/// validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowBlank<V> {
    pub(crate) inner: V,
}

impl<V> AllowBlank<V> {
    /// Wraps `inner`.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for AllowBlank<V>
where
    V: Validate<Input = str>,
{
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            Ok(())
        } else {
            self.inner.validate(input)
        }
    }
}

/// Creates an `AllowBlank` combinator.
pub fn allow_blank<V>(validator: V) -> AllowBlank<V>
where
    V: Validate<Input = str>,
{
    AllowBlank::new(validator)
}
