//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ErrorKind`],
//!   [`ErrorSeverity`]
//!
//! Validators are generic over their input type and compose through the
//! combinator methods of [`ValidateExt`]:
//!
//! ```
//! use castra_validator::prelude::*;
//!
//! let landline_or_mobile = digit_count(10).or(digit_count(11));
//! assert!(landline_or_mobile.validate("(11) 3333-4444").is_ok());
//! assert!(landline_or_mobile.validate("(11) 98765-4321").is_ok());
//! assert!(landline_or_mobile.validate("3333-4444").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ErrorKind, ErrorSeverity, ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
