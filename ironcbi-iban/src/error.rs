//! Error types for IBAN structure compilation and validation.

use thiserror::Error;

/// Error type for structure-table compilation.
///
/// These are configuration errors: the structure strings are static data, so
/// any of these failing at runtime means the table itself is corrupted.
#[derive(Debug, Error)]
pub enum StructureError {
    /// The structure string does not start with a 2-letter country code.
    #[error("structure '{structure}' does not start with a 2-letter country code")]
    MissingCountryPrefix {
        /// The offending structure string.
        structure: String,
    },

    /// A segment could not be parsed as `<length>['!']<type>`.
    #[error("malformed segment at offset {offset} in structure '{structure}'")]
    MalformedSegment {
        /// The offending structure string.
        structure: String,
        /// Character offset of the malformed segment.
        offset: usize,
    },

    /// A segment uses a type letter other than `n`, `a`, or `c`.
    #[error("unknown segment type '{kind}' in structure '{structure}'")]
    UnknownSegmentType {
        /// The offending structure string.
        structure: String,
        /// The unrecognized type letter.
        kind: char,
    },

    /// The generated pattern failed to compile.
    #[error("regex compilation failed: {0}")]
    Regex(#[from] regex::Error),
}

/// Error type for validating a single IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidIbanError {
    /// No structure is known for the IBAN's country prefix.
    #[error("unknown IBAN country code '{country}'")]
    UnknownCountry {
        /// The 2-character prefix of the rejected IBAN.
        country: String,
    },

    /// The IBAN does not match its country's structure.
    #[error("invalid IBAN structure for country {country}")]
    StructureMismatch {
        /// Country code whose structure failed to match.
        country: String,
    },

    /// The MOD 97-10 check digits do not verify.
    #[error("invalid IBAN check digits")]
    ChecksumMismatch,
}
