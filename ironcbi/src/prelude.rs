//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use ironcbi::prelude::*;
//! ```

// Core types
pub use ironcbi_core::{DateStyle, Error as FieldError, FieldKind, FieldValue};

// Schema types
pub use ironcbi_schema::{
    GroupCursor, RecordError, RecordInstance, RecordSchema, SchemaBuilder, SchemaError,
    SchemaRegistry,
};

// IBAN types
pub use ironcbi_iban::{IbanValidator, InvalidIbanError, validate_iban};

// Record catalog
pub use ironcbi_records::RECORD_WIDTH;
