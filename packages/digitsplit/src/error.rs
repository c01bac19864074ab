//! Error types for digitsplit.

use thiserror::Error;

/// Main error type for the digitsplit library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Nothing to parse after trimming whitespace.
    #[error("Empty input: expected a non-negative integer")]
    EmptyInput,

    /// Input contains something other than decimal digits.
    #[error("Invalid number: '{0}'. Expected decimal digits only (e.g., 1000)")]
    InvalidNumber(String),

    /// Input has a leading minus sign.
    #[error("Negative number: '{0}'. Only non-negative integers can be split")]
    NegativeNumber(String),

    /// Input does not fit in 64 bits.
    #[error("Number too large for 64-bit arithmetic: '{0}'")]
    Overflow(String),

    /// Verification range is empty or too wide.
    #[error(
        "Invalid range {from}..={to}: expected from <= to <= {max_value} and at most {max_span} values",
        max_value = crate::config::MAX_VERIFY_VALUE,
        max_span = crate::config::MAX_VERIFY_SPAN
    )]
    InvalidRange { from: u64, to: u64 },

    /// A required operand was not supplied.
    #[error("Missing operand: {0}")]
    MissingOperand(&'static str),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for digitsplit operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
