//! Answer checker.
//!
//! Reads the same `n res` pair a judge feeds to a checker program and decides
//! whether `res` is the maximum digit sum of `n`.

use std::fmt;

use tracing::debug;

use crate::decimal::{max_digit_sum_decimal, Decimal};
use crate::splitter::max_digit_sum;

/// Outcome of checking a claimed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
}

impl Verdict {
    /// Process exit status a checker reports for this verdict.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Accepted => 0,
            Verdict::WrongAnswer => 1,
        }
    }

    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }

    fn from_comparison(expected: u64, claimed: u64) -> Self {
        if expected == claimed {
            Verdict::Accepted
        } else {
            debug!(expected, claimed, "claimed answer rejected");
            Verdict::WrongAnswer
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::WrongAnswer => write!(f, "wrong answer"),
        }
    }
}

/// Check `claimed` against the maximum digit sum of `n`.
///
/// # Examples
/// ```
/// use digitsplit::{check, Verdict};
///
/// assert_eq!(check(100, 19), Verdict::Accepted);
/// assert_eq!(check(100, 1), Verdict::WrongAnswer);
/// ```
pub fn check(n: u64, claimed: u64) -> Verdict {
    Verdict::from_comparison(max_digit_sum(n), claimed)
}

/// [`check`] for inputs of any length.
pub fn check_decimal(n: &Decimal, claimed: u64) -> Verdict {
    Verdict::from_comparison(max_digit_sum_decimal(n), claimed)
}
