//! Error types for the quadcode entropy coders.

use thiserror::Error;

/// Error variants for encode/decode operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A symbol fell outside the 4-symbol alphabet {0,1,2,3}.
    #[error("symbol {0} out of range (0..=3)")]
    SymbolOutOfRange(u8),

    /// A stream ended before the expected header or state bytes.
    #[error("truncated stream: {0}")]
    Truncated(&'static str),

    /// A decoded probability model violates its invariants.
    #[error("invalid model: {0}")]
    InvalidModel(&'static str),

    /// A bit reader was asked to read past the end of its buffer.
    #[error("bit reader out of data")]
    OutOfData,
}

/// A specialized Result type for quadcode operations.
pub type Result<T> = std::result::Result<T, Error>;
