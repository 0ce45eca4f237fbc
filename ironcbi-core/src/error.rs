//! Error types for field formatting operations.

use thiserror::Error;

/// Error type for fixed-width field formatting.
#[derive(Debug, Error)]
pub enum Error {
    /// The value's type cannot be encoded by the field's kind.
    #[error("cannot encode {value_type} value into {kind} field")]
    TypeMismatch {
        /// Field kind name.
        kind: &'static str,
        /// Type name of the rejected value.
        value_type: &'static str,
    },

    /// The rendered value does not fit the declared field width.
    #[error("rendered value '{rendered}' does not fit field width {width}")]
    WidthOverflow {
        /// Declared field width in characters.
        width: usize,
        /// The oversized rendering.
        rendered: String,
    },
}

/// Result type alias for field formatting operations.
pub type Result<T> = std::result::Result<T, Error>;
