//! Absolute URL validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates an absolute URL such as `https://castrapet.org/agenda`.
    ///
    /// Parsing follows the WHATWG URL standard through the `url` crate, so a
    /// relative reference like `/agenda` is rejected. Empty input fails; use
    /// [`allow_blank`](crate::foundation::ValidateExt::allow_blank) for an
    /// optional field.
    pub AbsoluteUrl for str;
    rule(input) { url::Url::parse(input).is_ok() }
    error(input) { ValidationError::invalid_format("", "absolute URL") }
    fn absolute_url();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};

    #[test]
    fn test_absolute_urls() {
        assert!(absolute_url().validate("https://example.com").is_ok());
        assert!(absolute_url().validate("http://localhost:8080/a?b=c").is_ok());
        assert!(absolute_url().validate("mailto:tutor@example.com").is_ok());
    }

    #[test]
    fn test_rejections() {
        assert!(absolute_url().validate("").is_err());
        assert!(absolute_url().validate("/agenda").is_err());
        assert!(absolute_url().validate("example.com").is_err());
        assert!(absolute_url().validate("http://").is_err());
    }

    #[test]
    fn test_optional() {
        assert!(absolute_url().allow_blank().validate("").is_ok());
    }
}
