//! Configuration constants and input validation.

use crate::decimal::Decimal;
use crate::error::{Result, SplitterError};

/// Numeric base the digit sums are taken in.
pub const RADIX: u64 = 10;

/// Inputs below this value are their own maximum digit sum.
pub const SINGLE_DIGIT_LIMIT: u64 = 10;

/// Largest number of values `verify` will brute-force in one run.
pub const MAX_VERIFY_SPAN: u64 = 100_000;

/// Largest value `verify` will brute-force.
///
/// Exhaustive search is O(n) per value, so together with [`MAX_VERIFY_SPAN`]
/// this bounds a run to ~10^10 digit-sum evaluations.
pub const MAX_VERIFY_VALUE: u64 = 100_000;

/// Validate that `text` is a non-negative base-10 integer literal.
///
/// Surrounding whitespace and a single leading `+` are accepted. Returns the
/// digit slice.
///
/// # Examples
/// ```
/// use digitsplit::config::validate_digits;
///
/// assert_eq!(validate_digits(" +0042\n").unwrap(), "0042");
/// assert!(validate_digits("-5").is_err());
/// assert!(validate_digits("4x").is_err());
/// ```
pub fn validate_digits(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SplitterError::EmptyInput);
    }
    if trimmed.starts_with('-') {
        return Err(SplitterError::NegativeNumber(trimmed.to_string()));
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SplitterError::InvalidNumber(trimmed.to_string()));
    }

    Ok(digits)
}

/// Parse a non-negative integer that fits in `u64`.
///
/// # Examples
/// ```
/// use digitsplit::config::parse_number;
///
/// assert_eq!(parse_number("100\n").unwrap(), 100);
/// assert!(parse_number("18446744073709551616").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<u64> {
    let digits = validate_digits(text)?;
    // Only overflow can fail once the digits are validated.
    digits
        .parse()
        .map_err(|_| SplitterError::Overflow(text.trim().to_string()))
}

/// Parse a non-negative integer of any length.
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    text.parse()
}
