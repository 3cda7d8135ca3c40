//! Numeric bound validators
//!
//! Comparisons go through `PartialOrd`, so a NaN input never satisfies a
//! bound and always fails.

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates `min <= value <= max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use castra_validator::validators::in_range;
    /// use castra_validator::foundation::Validate;
    ///
    /// let age = in_range(0_u32, 30);
    /// assert!(age.validate(&12).is_ok());
    /// assert!(age.validate(&31).is_err());
    /// assert!(in_range(0.0, 1.0).validate(&f64::NAN).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::out_of_range("", self.min, self.max, *input)
    }
    fn in_range(min: T, max: T);
}

crate::validator! {
    /// Validates `value > bound`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidationError::new("greater_than", format!("Value must be greater than {}", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
            .with_kind(crate::foundation::ErrorKind::OutOfRange)
    }
    fn greater_than(bound: T);
}

crate::validator! {
    /// Validates `value <= max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub AtMost<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("at_most", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
            .with_kind(crate::foundation::ErrorKind::OutOfRange)
    }
    fn at_most(max: T);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, Validate};

    #[test]
    fn test_in_range_inclusive() {
        let validator = in_range(1, 5);
        assert!(validator.validate(&1).is_ok());
        assert!(validator.validate(&5).is_ok());
        assert!(validator.validate(&0).is_err());
        let err = validator.validate(&6).unwrap_err();
        assert_eq!(err.kind, ErrorKind::OutOfRange);
        assert_eq!(err.param("actual"), Some("6"));
    }

    #[test]
    fn test_nan_fails_every_bound() {
        assert!(in_range(f64::MIN, f64::MAX).validate(&f64::NAN).is_err());
        assert!(greater_than(0.0).validate(&f64::NAN).is_err());
        assert!(at_most(100.0).validate(&f64::NAN).is_err());
    }

    #[test]
    fn test_exclusive_lower_inclusive_upper() {
        assert!(greater_than(0.0).validate(&0.0).is_err());
        assert!(greater_than(0.0).validate(&0.01).is_ok());
        assert!(at_most(100.0).validate(&100.0).is_ok());
        assert!(at_most(100.0).validate(&100.01).is_err());
    }
}
