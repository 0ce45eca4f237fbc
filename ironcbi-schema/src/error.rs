//! Error types for schema definition and record population.

use thiserror::Error;

/// Error type for record-type definition.
///
/// These are configuration errors: they are detected once at schema build
/// time and never occur at runtime against correct static definitions.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two fields in the same record share a name.
    #[error("record '{record}' already has a field named '{field}'")]
    DuplicateField {
        /// Record kind name.
        record: String,
        /// Duplicated field name.
        field: String,
    },

    /// A schema with the same kind name is already registered.
    #[error("a schema for record kind '{record}' is already registered")]
    DuplicateSchema {
        /// Record kind name.
        record: String,
    },

    /// The declared 1-based position does not match the running offset cursor.
    #[error(
        "field '{field}' in record '{record}' declared at position {declared}, \
         but the preceding fields place it at {computed}"
    )]
    PositionMismatch {
        /// Record kind name.
        record: String,
        /// Field name.
        field: String,
        /// Declared 1-based position.
        declared: usize,
        /// Position computed from the preceding field widths.
        computed: usize,
    },

    /// A decimal field's digit budget does not add up to its width.
    #[error(
        "decimal field '{field}': {integer_digits} integer + {fractional_digits} \
         fractional digits do not equal width {width}"
    )]
    InvalidDecimalDigits {
        /// Field name.
        field: String,
        /// Digits before the implied decimal point.
        integer_digits: u8,
        /// Digits after the implied decimal point.
        fractional_digits: u8,
        /// Declared field width.
        width: usize,
    },

    /// A date field was declared with the wrong width for its style.
    #[error("date field '{field}' requires width {expected}, declared {actual}")]
    InvalidDateWidth {
        /// Field name.
        field: String,
        /// Width mandated by the date style.
        expected: usize,
        /// Declared width.
        actual: usize,
    },

    /// A boolean field was declared with a width other than one.
    #[error("boolean field '{field}' requires width 1, declared {actual}")]
    InvalidBooleanWidth {
        /// Field name.
        field: String,
        /// Declared width.
        actual: usize,
    },

    /// A composite group was declared with zero repetitions.
    #[error("group '{group}' in record '{record}' declared with zero repetitions")]
    EmptyGroup {
        /// Record kind name.
        record: String,
        /// Group name.
        group: String,
    },

    /// A field's default value cannot be rendered at the declared width.
    #[error("default value for field '{field}' cannot be formatted")]
    Default {
        /// Field name.
        field: String,
        /// Underlying formatting failure.
        #[source]
        source: ironcbi_core::Error,
    },
}

/// Error type for populating a record instance.
#[derive(Debug, Error)]
pub enum RecordError {
    /// No field with the given name exists in the schema.
    #[error("record '{record}' has no field named '{field}'")]
    UnknownField {
        /// Record kind name.
        record: String,
        /// Looked-up field name.
        field: String,
    },

    /// The named entry is a composite group, not a scalar field.
    #[error("field '{field}' in record '{record}' is a group; use group access")]
    NotAScalarField {
        /// Record kind name.
        record: String,
        /// Field name.
        field: String,
    },

    /// The named entry is a scalar field, not a composite group.
    #[error("field '{field}' in record '{record}' is not a group")]
    NotAGroup {
        /// Record kind name.
        record: String,
        /// Field name.
        field: String,
    },

    /// A group repetition index is outside `0..repetitions`.
    #[error("index {index} out of range for group '{group}' with {repetitions} repetitions")]
    IndexOutOfRange {
        /// Group name.
        group: String,
        /// Requested repetition index.
        index: usize,
        /// Declared repetition count.
        repetitions: usize,
    },

    /// A value could not be formatted for its field.
    #[error("cannot format value for field '{field}'")]
    Field {
        /// Field name.
        field: String,
        /// Underlying formatting failure.
        #[source]
        source: ironcbi_core::Error,
    },
}
