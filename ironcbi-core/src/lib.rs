//! # IronCBI Core
//!
//! Field values and fixed-width field encoders for CBI text records.
//!
//! This crate provides:
//! - [`FieldValue`] - the tagged value type accepted by every field setter
//! - [`FieldKind`] - the catalog of field encoders (alphanumeric, numeric,
//!   decimal, date, boolean), each with a fixed output width contract
//! - Error types for field formatting operations
//!
//! Every encoder produces exactly the declared number of characters or fails;
//! the alphanumeric encoder is the single silent-truncation exception.

pub mod error;
pub mod field;
pub mod value;

pub use error::{Error, Result};
pub use field::{DateStyle, FieldKind};
pub use value::FieldValue;
