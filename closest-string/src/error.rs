//! Error types for the closest string library

use thiserror::Error;

/// Error type for building a [`StringSet`](crate::StringSet)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringSetError {
    /// Strings must have at least one position
    #[error("String length must be positive")]
    EmptyLength,
    /// A row does not have the length fixed for the set
    #[error("String {row} has length {actual}, expected {expected}")]
    LengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A character outside of {0, 1, *}
    #[error("Invalid symbol {symbol:?} in string {row} at position {position}")]
    InvalidSymbol {
        row: usize,
        position: usize,
        symbol: char,
    },
}

/// Error type for reading a string set from a text stream
#[derive(Debug, Error)]
pub enum ReadError {
    /// Underlying stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The stream contained no strings at all
    #[error("Input contains no strings")]
    Empty,
    /// A line does not follow the expected format
    #[error("Line {line}: {reason}")]
    Format { line: usize, reason: String },
    /// The collected rows did not form a valid set
    #[error("Invalid string set: {0}")]
    StringSet(#[from] StringSetError),
}
