//! # Error Types
//!
//! Hard failures of the attribute type system. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation problems are *not* errors. They are accumulated as
//!   [`Diagnostics`] and returned by value.
//! - Errors are reserved for conversions that cannot produce a value at
//!   all (malformed low-level data, contract violations between layers).
//!   A conversion that fails returns no partial value.

use thiserror::Error;

use crate::diag::Diagnostics;
use crate::wire::WireType;

/// Error extracting or decoding raw wire data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WireError {
    /// The value is not yet known, so it has no data to extract.
    #[error("unmarshaling unknown values is not supported")]
    Unknown,

    /// The value is null, so it has no data to extract.
    #[error("unmarshaling null values is not supported")]
    Null,

    /// The raw data does not have the shape the caller asked for.
    #[error("can't unmarshal {found} into {expected}")]
    DataMismatch {
        /// Shape the caller expected.
        expected: String,
        /// Shape actually held by the value.
        found: String,
    },

    /// A JSON document does not match the declared wire type.
    #[error("JSON {found} does not match wire type {expected}")]
    JsonMismatch {
        /// Declared wire type.
        expected: WireType,
        /// JSON kind that was encountered.
        found: String,
    },
}

/// Error converting a wire value into a typed attribute value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttrError {
    /// Low-level data extraction failed.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The wire value's declared type is not the one the attribute type
    /// decodes.
    #[error("can't unmarshal {found} into a {expected} value")]
    WireTypeMismatch {
        /// Wire type the attribute type decodes.
        expected: WireType,
        /// Wire type that was received.
        found: WireType,
    },

    /// A lower layer returned a value of a different kind than its
    /// contract promises.
    #[error("unexpected value type of {found}")]
    UnexpectedValueKind {
        /// Name of the value kind that was returned.
        found: String,
    },

    /// Wrapping a string value into a custom string-based value reported
    /// error diagnostics.
    #[error("unexpected error converting StringValue to StringValuable: {0}")]
    StringConversion(Diagnostics),
}
