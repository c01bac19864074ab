//! Closed-form maximum digit sum over all splits `a + b = n`.
//!
//! Turning as many digits of one operand into 9 as possible never lowers the
//! combined digit sum, so the best split pairs the all-9s candidate
//! `power * 10 - 1` (where `power` is the largest power of ten `<= n / 10`)
//! with the remainder.

use tracing::debug;

use crate::config::{RADIX, SINGLE_DIGIT_LIMIT};

/// An ordered pair `(a, b)` with `a + b = n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub a: u64,
    pub b: u64,
}

impl Split {
    /// The value that was split.
    ///
    /// Cannot overflow for splits produced by this module since both parts
    /// come from a single `u64`.
    pub fn total(&self) -> u64 {
        self.a + self.b
    }

    /// `digit_sum(a) + digit_sum(b)`.
    pub fn digit_sum(&self) -> u64 {
        digit_sum(self.a) + digit_sum(self.b)
    }
}

/// Sum of the decimal digits of `x`.
///
/// # Examples
/// ```
/// use digitsplit::digit_sum;
///
/// assert_eq!(digit_sum(0), 0);
/// assert_eq!(digit_sum(999), 27);
/// ```
pub fn digit_sum(mut x: u64) -> u64 {
    let mut sum = 0;
    while x > 0 {
        sum += x % RADIX;
        x /= RADIX;
    }
    sum
}

/// The all-9s half of the maximizing split, or `None` when `n` is a single digit.
///
/// # Examples
/// ```
/// use digitsplit::candidate;
///
/// assert_eq!(candidate(7), None);
/// assert_eq!(candidate(10), Some(9));
/// assert_eq!(candidate(100), Some(99));
/// assert_eq!(candidate(99), Some(9));
/// ```
pub fn candidate(n: u64) -> Option<u64> {
    if n < SINGLE_DIGIT_LIMIT {
        return None;
    }

    let limit = n / RADIX;
    let mut power = 1;
    while power * RADIX <= limit {
        power *= RADIX;
    }

    // power <= n / 10, so power * 10 <= n
    Some(power * RADIX - 1)
}

/// The split that reaches the maximum digit sum.
pub fn best_split(n: u64) -> Split {
    let split = match candidate(n) {
        Some(a) => Split { a, b: n - a },
        None => Split { a: n, b: 0 },
    };
    debug!(n, a = split.a, b = split.b, "chose split");
    split
}

/// Maximum of `digit_sum(a) + digit_sum(b)` over all `a + b = n`.
///
/// # Examples
/// ```
/// use digitsplit::max_digit_sum;
///
/// assert_eq!(max_digit_sum(9), 9);
/// assert_eq!(max_digit_sum(100), 19);
/// assert_eq!(max_digit_sum(1_000_000), 55);
/// ```
pub fn max_digit_sum(n: u64) -> u64 {
    if n < SINGLE_DIGIT_LIMIT {
        return n;
    }
    best_split(n).digit_sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(10), 1);
        assert_eq!(digit_sum(1234), 10);
        assert_eq!(digit_sum(u64::MAX), 87);
    }

    #[test]
    fn test_single_digits_are_their_own_answer() {
        for n in 0..10 {
            assert_eq!(max_digit_sum(n), n);
            assert_eq!(best_split(n), Split { a: n, b: 0 });
        }
    }

    #[test]
    fn test_known_cases() {
        assert_eq!(max_digit_sum(0), 0);
        assert_eq!(max_digit_sum(9), 9);
        assert_eq!(max_digit_sum(10), 10);
        assert_eq!(max_digit_sum(19), 10);
        assert_eq!(max_digit_sum(100), 19);
        assert_eq!(max_digit_sum(1_000_000), 55);
    }

    #[test]
    fn test_best_split_parts() {
        assert_eq!(best_split(10), Split { a: 9, b: 1 });
        assert_eq!(best_split(19), Split { a: 9, b: 10 });
        assert_eq!(best_split(100), Split { a: 99, b: 1 });
        assert_eq!(best_split(1_000_000), Split { a: 999_999, b: 1 });
    }

    #[test]
    fn test_candidate_has_one_digit_fewer_than_n() {
        assert_eq!(candidate(10), Some(9));
        assert_eq!(candidate(99), Some(9));
        assert_eq!(candidate(100), Some(99));
        assert_eq!(candidate(12_345), Some(9_999));
    }

    #[test]
    fn test_split_preserves_total() {
        for n in [10, 35, 99, 100, 101, 987_654_321, u64::MAX] {
            assert_eq!(best_split(n).total(), n);
        }
    }

    #[test]
    fn test_u64_max_does_not_overflow() {
        // 18446744073709551615 = 9999999999999999999 + 8446744073709551616
        let split = best_split(u64::MAX);
        assert_eq!(split.a, 9_999_999_999_999_999_999);
        assert_eq!(max_digit_sum(u64::MAX), 9 * 19 + digit_sum(split.b));
    }
}
