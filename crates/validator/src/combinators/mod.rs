//! Validator combinators
//!
//! - [`And`] / [`Or`]: logical composition
//! - [`WithMessage`]: user-facing message override
//! - [`AllowBlank`]: optional text fields

pub mod allow_blank;
pub mod and;
pub mod message;
pub mod or;

pub use allow_blank::{AllowBlank, allow_blank};
pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use or::{Or, or};
