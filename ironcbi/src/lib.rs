//! # IronCBI
//!
//! Fixed-width CBI record encoding and IBAN validation for Rust.
//!
//! IronCBI provides the record layer of the Italian CBI interbank standard:
//! declarative fixed-width record schemas with computed offsets, repeated
//! composite field groups, type-safe field encoders, and structural plus
//! MOD 97-10 IBAN validation.
//!
//! ## Features
//!
//! - **Declarative schemas** - fields declared at their documented positions,
//!   revalidated against the computed layout at build time
//! - **Exact-width encoders** - alphanumeric, numeric, fixed-point decimal,
//!   date, and boolean fields that always render at their declared width
//! - **Composite groups** - fixed-size sub-schemas repeated inside a record
//! - **IBAN validation** - SWIFT structure matching compiled per country plus
//!   ISO 7064 MOD 97-10 check digits
//! - **CBI credit-transfer catalog** - the 120-character bonifici record set,
//!   ready to register
//!
//! ## Quick Start
//!
//! ```
//! use ironcbi::prelude::*;
//!
//! let registry = ironcbi::records::registry().unwrap();
//! let mut record = registry.instantiate("16").unwrap();
//!
//! validate_iban("IT86U0760111500000010117463").unwrap();
//! record.set("prog_number", 1_i64).unwrap();
//! record.set("iban", "IT86U0760111500000010117463").unwrap();
//!
//! let line = record.format();
//! assert_eq!(line.len(), 120);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - field values and fixed-width field encoders
//! - [`schema`] - schema builder, composite groups, record instances, registry
//! - [`iban`] - IBAN structure compiler and validator
//! - [`records`] - the CBI credit-transfer record catalog

pub mod prelude;

/// Field values and fixed-width field encoders.
pub mod core {
    pub use ironcbi_core::*;
}

/// Record schemas, composite groups, and record instances.
pub mod schema {
    pub use ironcbi_schema::*;
}

/// IBAN structure compilation and validation.
pub mod iban {
    pub use ironcbi_iban::*;
}

/// The CBI credit-transfer record catalog.
pub mod records {
    pub use ironcbi_records::*;
}

// Re-export commonly used items at the crate root
pub use ironcbi_core::{DateStyle, FieldKind, FieldValue};
pub use ironcbi_iban::{IbanValidator, validate_iban};
pub use ironcbi_schema::{
    RecordInstance, RecordSchema, SchemaBuilder, SchemaRegistry,
};
