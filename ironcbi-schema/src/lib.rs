//! # IronCBI Schema
//!
//! Record schemas for fixed-width CBI text records.
//!
//! This crate provides:
//! - [`SchemaBuilder`] - fluent declaration of a record type's ordered fields
//! - [`RecordSchema`] - the immutable, validated schema with computed offsets
//!   and a precomputed default buffer
//! - [`GroupSpec`] - a sub-schema repeated a fixed number of times inside a
//!   parent record
//! - [`RecordInstance`] - a mutable value buffer bound to a schema, formatted
//!   to one fixed-width line
//! - [`SchemaRegistry`] - the startup-built, read-only table of record schemas
//!
//! Schemas are built once at registration time and never mutate; instances are
//! created per business record, populated field by field, and formatted once.

pub mod builder;
pub mod error;
pub mod record;
pub mod registry;
pub mod schema;

pub use builder::SchemaBuilder;
pub use error::{RecordError, SchemaError};
pub use record::{GroupCursor, RecordInstance};
pub use registry::SchemaRegistry;
pub use schema::{FieldSpec, GroupSpec, RecordSchema, SchemaEntry};
