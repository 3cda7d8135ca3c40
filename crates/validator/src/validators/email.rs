//! E-mail validator

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

crate::validator! {
    /// Validates e-mail shape: a non-empty local part, `@`, and a domain
    /// containing a dot, with no whitespace anywhere.
    ///
    /// Empty input fails; wrap with
    /// [`allow_blank`](crate::foundation::ValidateExt::allow_blank) for an
    /// optional field.
    ///
    /// # Examples
    ///
    /// ```
    /// use castra_validator::validators::Email;
    /// use castra_validator::foundation::Validate;
    ///
    /// assert!(Email.validate("a@b.c").is_ok());
    /// assert!(Email.validate("a@b").is_err());
    /// assert!(Email.validate("a b@c.d").is_err());
    /// ```
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("", "email") }
    fn email();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_valid() {
        assert!(email().validate("tutor@example.com").is_ok());
        assert!(email().validate("ana.souza+pets@mail.com.br").is_ok());
    }

    #[test]
    fn test_invalid() {
        assert!(email().validate("").is_err());
        assert!(email().validate("invalid").is_err());
        assert!(email().validate("@example.com").is_err());
        assert!(email().validate("user@").is_err());
        assert!(email().validate("a@@b.c").is_err());
        assert!(email().validate("a@b.c ").is_err());
        assert!(email().validate("a@b\t.c").is_err());
    }
}
