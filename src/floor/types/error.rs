//! Custom error types for the icetower-dump crate.

use thiserror::Error;

use crate::floor::utils::escape_bytes;

/// The primary error type for all decoding operations in this crate.
#[derive(Debug, Error)]
pub enum FloorError {
    /// An error originating from I/O operations (opening or reading the input).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a fixed-size record was fully read.
    #[error("Unexpected end of file while reading {context}: expected {expected} bytes, but found {found} bytes")]
    TruncatedInput {
        context: String,
        expected: usize,
        found: usize,
    },

    /// The first 12 bytes of the file are not the floor file magic.
    #[error("The signature of file is incorrect: b\"{}\"", escape_bytes(.0))]
    BadSignature([u8; 12]),

    /// The header declares a format version this crate cannot read.
    #[error("Unsupported floor file version: {0}. Only version 1 is supported.")]
    UnsupportedVersion(i32),

    /// The header declares a negative number of floors.
    #[error("Malformed header: negative floor count {0}")]
    NegativeFloorCount(i32),
}

/// A convenience `Result` type alias using the crate's `FloorError` type.
pub type Result<T> = std::result::Result<T, FloorError>;
