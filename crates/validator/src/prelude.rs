//! Prelude module for convenient imports.
//!
//! Provides a single `use castra_validator::prelude::*;` import that brings
//! in the traits, error types, validators and combinators.
//!
//! # Examples
//!
//! ```
//! use castra_validator::prelude::*;
//!
//! let house_number = required().and(numeric());
//! assert!(house_number.validate("1000").is_ok());
//! assert!(house_number.validate("s/n").is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    ErrorKind, ErrorSeverity, Validate, ValidateExt, ValidationError, ValidationErrors,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    AllowBlank, And, Or, WithMessage, allow_blank, and, or, with_message,
};

// ============================================================================
// FORM: Whole-record validation and masks
// ============================================================================

pub use crate::form::{FormConfig, FormRecord, FormReport, FormValidator};
pub use crate::mask::Mask;
pub use crate::registry::{RegistryStats, SearchCriteria};
