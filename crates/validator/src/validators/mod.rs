//! Built-in validators
//!
//! One validator type per field rule of the registration form, each with a
//! lowercase factory function.
//!
//! # Categories
//!
//! - **Presence and text**: required, length, numeric
//! - **Documents**: CPF, CNPJ, RG
//! - **Contact and address**: e-mail, phone, CEP, URL
//! - **Animal**: microchip, weight
//! - **Dates**: `DD/MM/YYYY`, minimum age
//! - **Numeric**: bounds
//! - **Accounts**: password strength
//!
//! # Examples
//!
//! ```
//! use castra_validator::prelude::*;
//!
//! let tutor_name = required().and(max_length(80));
//! assert!(tutor_name.validate("Ana Souza").is_ok());
//!
//! let optional_chip = Microchip.allow_blank();
//! assert!(optional_chip.validate("").is_ok());
//! ```

pub mod absolute_url;
pub mod cnpj;
pub mod cpf;
pub mod date;
pub mod digit_count;
pub mod email;
pub mod length;
pub mod microchip;
pub mod password;
pub mod phone;
pub mod postal_code;
pub mod range;
pub mod required;
pub mod rg;
pub mod weight;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use absolute_url::{AbsoluteUrl, absolute_url};
pub use cnpj::{Cnpj, cnpj};
pub use cpf::{Cpf, cpf};
pub use date::{DateDmy, MinimumAge, age_on, date_dmy, parse_date_dmy};
pub use digit_count::{DigitCount, DigitRange, Numeric, digit_count, digit_range, numeric};
pub use email::{Email, email};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use microchip::{MICROCHIP_DIGITS, Microchip, microchip};
pub use password::{PasswordCriteria, PasswordStrength, password_strength};
pub use phone::Phone;
pub use postal_code::{PostalCode, postal_code};
pub use range::{AtMost, GreaterThan, InRange, at_most, greater_than, in_range};
pub use required::{Required, required};
pub use rg::{RG_DIGITS, Rg, rg};
pub use weight::{MAX_WEIGHT_KG, Weight, parse_decimal, weight};
