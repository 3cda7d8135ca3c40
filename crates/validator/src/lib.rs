//! # castra-validator
//!
//! Field validation, input masks and whole-form checks for the Castra Pet
//! animal registration form.
//!
//! ## Quick Start
//!
//! ```
//! use castra_validator::prelude::*;
//!
//! // Compose validators with .and() / .or() / .allow_blank()
//! let document = Cpf.or(Cnpj);
//! assert!(document.validate("529.982.247-25").is_ok());
//!
//! let optional_email = Email.allow_blank();
//! assert!(optional_email.validate("").is_ok());
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: one type per field rule, implementing
//!   [`Validate`](foundation::Validate) and returning a structured
//!   [`ValidationError`](foundation::ValidationError).
//! - [`checks`]: the same rules as plain `bool` functions.
//! - [`mask`]: progressive input masks and display formatters.
//! - [`form`]: the required-field and format pass over a whole record.
//! - [`registry`]: search and summary counts over many records.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! Nothing in this crate performs I/O or keeps global state; every
//! validator is a plain `Send + Sync` value.

// ValidationError is the error type of every validator; boxing it would add
// an allocation to each failed check.
#![allow(clippy::result_large_err)]
// Combinator nesting (And<Or<...>, ...>) produces deep types by construction.
#![allow(clippy::type_complexity)]

pub mod checks;
pub mod combinators;
pub mod digits;
pub mod form;
pub mod foundation;
mod macros;
pub mod mask;
pub mod prelude;
pub mod registry;
pub mod validators;
