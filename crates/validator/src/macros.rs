//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`]: struct + `Validate` impl + factory fn
//! - [`compose!`]: AND-chain multiple validators
//! - [`any_of!`]: OR-chain multiple validators

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied to struct validators and
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` to unit validators.
/// Add extra derives to struct validators via `#[derive(...)]`.
///
/// **Unit validator**:
/// ```
/// use castra_validator::validator;
/// use castra_validator::foundation::{Validate, ValidationError};
///
/// validator! {
///     pub NoSpaces for str;
///     rule(input) { !input.contains(' ') }
///     error(input) { ValidationError::new("no_spaces", "must not contain spaces") }
///     fn no_spaces();
/// }
///
/// assert!(no_spaces().validate("rex").is_ok());
/// assert!(NoSpaces.validate("r ex").is_err());
/// ```
///
/// **Struct with fields** (auto `new` from all fields, or a custom `new`):
/// ```
/// use castra_validator::validator;
/// use castra_validator::foundation::{Validate, ValidationError};
///
/// validator! {
///     #[derive(Copy, PartialEq, Eq)]
///     pub StartsWithDigit { required: bool } for str;
///     rule(self, input) {
///         !self.required || input.starts_with(|c: char| c.is_ascii_digit())
///     }
///     error(self, input) { ValidationError::new("starts_with_digit", "must start with a digit") }
///     fn starts_with_digit(required: bool);
/// }
///
/// assert!(starts_with_digit(true).validate("9kg").is_ok());
/// assert!(StartsWithDigit::new(true).validate("kg").is_err());
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // One generic type parameter; bounds must be plain identifiers.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$g:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$g> {
            $(pub $field: $fty,)+
        }

        impl<$g: $first_bound $(+ $rest_bound)*> $name<$g> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$g: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$g> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$g: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$g> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```
/// use castra_validator::prelude::*;
///
/// let validator = castra_validator::compose![required(), min_length(2), max_length(40)];
/// assert!(validator.validate("Mel").is_ok());
/// assert!(validator.validate(" ").is_err());
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic.
///
/// ```
/// use castra_validator::prelude::*;
///
/// let validator = castra_validator::any_of![Cpf, Cnpj];
/// assert!(validator.validate("529.982.247-25").is_ok());
/// assert!(validator.validate("11.222.333/0001-81").is_ok());
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    validator! {
        /// A test unit validator.
        TestNotEmpty for str;
        rule(input) { !input.is_empty() }
        error(input) { ValidationError::new("not_empty", "must not be empty") }
        fn test_not_empty();
    }

    #[test]
    fn test_unit_validator() {
        assert!(TestNotEmpty.validate("hello").is_ok());
        assert!(test_not_empty().validate("").is_err());
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMinLen { min: usize } for str;
        rule(self, input) { input.len() >= self.min }
        error(self, input) {
            ValidationError::new("min_len", format!("need {} chars", self.min))
        }
        fn test_min_len(min: usize);
    }

    #[test]
    fn test_struct_validator() {
        assert!(TestMinLen { min: 3 }.validate("abc").is_ok());
        assert!(TestMinLen::new(3).validate("ab").is_err());
        assert!(test_min_len(5).validate("hello").is_ok());
    }

    validator! {
        TestRange { lo: usize, hi: usize } for usize;
        rule(self, input) { *input >= self.lo && *input <= self.hi }
        error(self, input) {
            ValidationError::new("range", format!("{} not in {}..{}", input, self.lo, self.hi))
        }
        new(lo: usize, hi: usize) { Self { lo, hi } }
        fn test_range(lo: usize, hi: usize);
    }

    #[test]
    fn test_custom_new() {
        let v = test_range(1, 10);
        assert!(v.validate(&5).is_ok());
        assert!(v.validate(&0).is_err());
        assert_eq!(v.validate(&11).unwrap_err().message, "11 not in 1..10");
    }

    use std::fmt::Display;

    validator! {
        #[derive(Copy, PartialEq)]
        TestMin<T: PartialOrd + Display + Copy> { min: T } for T;
        rule(self, input) { *input >= self.min }
        error(self, input) {
            ValidationError::new("min", format!("must be >= {}", self.min))
        }
        fn test_min_val(value: T);
    }

    #[test]
    fn test_generic_validator() {
        assert!(test_min_val(5_i32).validate(&5).is_ok());
        assert!(TestMin::new(1.5_f64).validate(&1.0).is_err());
    }

    #[test]
    fn test_compose_and_any_of() {
        use crate::foundation::ValidateExt;
        let all = compose![TestMinLen { min: 3 }, TestMinLen { min: 1 }];
        assert!(all.validate("abc").is_ok());
        assert!(all.validate("ab").is_err());

        let any = any_of![TestMinLen { min: 100 }, TestMinLen { min: 1 }];
        assert!(any.validate("x").is_ok());
    }
}
