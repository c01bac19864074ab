//! digitsplit - maximum digit sum over all splits `a + b = n`.
//!
//! Given a non-negative integer `n`, find the largest value of
//! `digit_sum(a) + digit_sum(b)` over all non-negative `a`, `b` with
//! `a + b = n`. The answer pairs the all-9s number with one digit fewer
//! than `n` with the remainder.
//!
//! # Example
//!
//! ```
//! use digitsplit::{best_split, max_digit_sum, Split};
//!
//! assert_eq!(max_digit_sum(100), 19);
//! assert_eq!(best_split(100), Split { a: 99, b: 1 });
//! ```
//!
//! # Architecture
//!
//! - [`splitter`]: the closed form on `u64`
//! - [`decimal`]: the same algorithm on arbitrary-length decimal numbers
//! - [`checker`]: judge-style verification of a claimed answer
//! - [`search`]: exhaustive search used to cross-check the closed form
//! - [`config`]: constants and input validation
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod checker;
pub mod cli;
pub mod config;
pub mod decimal;
pub mod error;
pub mod search;
pub mod splitter;

// Re-export main functions
pub use checker::{check, check_decimal, Verdict};
pub use decimal::{best_split_decimal, max_digit_sum_decimal, Decimal, DecimalSplit};
pub use search::{brute_force_max, verify_range, verify_range_against, VerifyReport};
pub use splitter::{best_split, candidate, digit_sum, max_digit_sum, Split};

// Re-export commonly used items
pub use config::{parse_decimal, parse_number};
pub use error::{Result, SplitterError};
