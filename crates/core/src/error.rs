//! Error types for the bitview demonstrator.
//!
//! Every bit operation in the demonstration is total, so the failure domains
//! are small: the command-line token, literal text handed to the parser, and
//! the output stream.

use thiserror::Error;

use crate::notation::Notation;

/// Top-level error type for all fallible operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The notation argument matched none of the recognized tokens
    #[error("Invalid notation '{0}'")]
    InvalidNotation(String),

    /// Literal text could not be decoded under the given notation
    #[error("malformed {notation} literal {literal:?}: {reason}")]
    MalformedLiteral {
        notation: Notation,
        literal: String,
        reason: LiteralError,
    },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a literal text is rejected by [`Notation::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Literal does not start with the prefix the notation requires
    #[error("expected prefix {expected:?}")]
    MissingPrefix { expected: &'static str },

    /// No digits after the prefix
    #[error("no digits")]
    Empty,

    /// A character is not a digit of the notation's radix
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// Value does not fit in 32 bits
    #[error("value exceeds 32 bits")]
    Overflow,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
