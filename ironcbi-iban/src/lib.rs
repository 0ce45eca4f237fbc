//! # IronCBI IBAN
//!
//! IBAN structural validation and ISO 7064 MOD 97-10 check-digit
//! verification.
//!
//! This crate provides:
//! - A compiler turning per-country SWIFT structure strings (for example
//!   `IT2!n1!a5!n5!n12!c`) into anchored regular expressions
//! - [`IbanValidator`] - a country-keyed table of compiled matchers plus the
//!   check-digit algorithm
//! - [`validate_iban`] - a convenience function over a shared validator built
//!   from the bundled SWIFT registry table
//!
//! Validation is stateless and safe for unlimited concurrent use; the
//! structure table is compiled once and read-only afterward.

pub mod compiler;
pub mod error;
pub mod structures;
pub mod validator;

pub use error::{InvalidIbanError, StructureError};
pub use structures::IBAN_STRUCTURES;
pub use validator::{IbanValidator, validate_iban};
