//! Error types for validation failures
//!
//! A failed check is described by a [`ValidationError`]: a stable code, a
//! human-readable message, an optional field name, ordered parameters, an
//! [`ErrorKind`] from the validation taxonomy and an [`ErrorSeverity`].
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// TAXONOMY
// ============================================================================

/// What went wrong with a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required value is absent or blank.
    Missing,
    /// A value is present but fails its pattern or checksum.
    #[default]
    InvalidFormat,
    /// A numeric value is present but outside the allowed bounds.
    OutOfRange,
}

/// Severity level of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    /// Error that must be fixed (default).
    #[default]
    Error,
    /// Warning that should be addressed but doesn't block validation.
    Warning,
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use castra_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new("cpf_length", "CPF must have 11 digits")
///     .with_field("cpf")
///     .with_param("actual", "10");
///
/// assert_eq!(error.kind, ErrorKind::InvalidFormat);
/// assert_eq!(error.param("actual"), Some("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "cpf_checksum", "weight_out_of_range"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Name of the form field the error belongs to, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Parameters of the message, as ordered key-value pairs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Position in the validation taxonomy.
    pub kind: ErrorKind,

    /// Whether the error blocks a submission.
    pub severity: ErrorSeverity,

    /// Errors produced by the validators this one wraps.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new `InvalidFormat` error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            kind: ErrorKind::InvalidFormat,
            severity: ErrorSeverity::Error,
            nested: Vec::new(),
        }
    }

    /// Sets the field name for this error. An empty name leaves it unset.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        let field = field.into();
        self.field = (!field.is_empty()).then_some(field);
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the taxonomy kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the severity level.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Replaces the message, keeping everything else.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error blocks submission.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.severity == ErrorSeverity::Error
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a `Missing` error.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", "This field is required")
            .with_field(field)
            .with_kind(ErrorKind::Missing)
    }

    /// Creates an "invalid_format" error naming the expected format.
    pub fn invalid_format(
        field: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("invalid_format", "Invalid format")
            .with_field(field)
            .with_param("expected", expected)
    }

    /// Creates a "min_length" error.
    pub fn min_length(field: impl Into<Cow<'static, str>>, min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_field(field)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
            .with_kind(ErrorKind::OutOfRange)
    }

    /// Creates a "max_length" error.
    pub fn max_length(field: impl Into<Cow<'static, str>>, max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_field(field)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
            .with_kind(ErrorKind::OutOfRange)
    }

    /// Creates an "out_of_range" error.
    pub fn out_of_range<T: fmt::Display>(
        field: impl Into<Cow<'static, str>>,
        min: T,
        max: T,
        actual: T,
    ) -> Self {
        Self::new(
            "out_of_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_field(field)
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
        .with_kind(ErrorKind::OutOfRange)
    }

    /// Creates a digit-count error for a normalized value.
    pub fn digit_count(
        code: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
        actual: usize,
    ) -> Self {
        let expected = expected.into();
        Self::new(code, format!("Expected {expected} digits, found {actual}"))
            .with_param("expected", expected)
            .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
///
/// Keeps insertion order, which is the order checks ran in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if any collected error blocks submission.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(ValidationError::is_blocking)
    }

    /// Returns the number of collected entries, warnings included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all entries.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the blocking entries.
    pub fn blocking(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.is_blocking())
    }

    /// Iterates over the warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ErrorSeverity::Warning)
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.kind, ErrorKind::InvalidFormat);
        assert!(error.is_blocking());
    }

    #[test]
    fn test_required_is_missing() {
        let error = ValidationError::required("tutor");
        assert_eq!(error.kind, ErrorKind::Missing);
        assert_eq!(error.field.as_deref(), Some("tutor"));
    }

    #[test]
    fn test_out_of_range_params() {
        let error = ValidationError::out_of_range("peso", 0, 100, 120);
        assert_eq!(error.kind, ErrorKind::OutOfRange);
        assert_eq!(error.param("min"), Some("0"));
        assert_eq!(error.param("max"), Some("100"));
        assert_eq!(error.param("actual"), Some("120"));
    }

    #[test]
    fn test_display_with_field_and_params() {
        let error = ValidationError::digit_count("cep_length", "8", 7).with_field("cep");
        assert_eq!(
            error.to_string(),
            "[cep] cep_length: Expected 8 digits, found 7 (params: [expected=8, actual=7])"
        );
    }

    #[test]
    fn test_warnings_do_not_block() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("rg_length", "short").with_severity(ErrorSeverity::Warning));
        assert!(!errors.has_errors());
        assert_eq!(errors.warnings().count(), 1);

        errors.add(ValidationError::required("cpf"));
        assert!(errors.has_errors());
        assert_eq!(errors.blocking().count(), 1);
        assert_eq!(errors.warnings().count(), 1);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
