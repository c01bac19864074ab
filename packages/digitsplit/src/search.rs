//! Exhaustive search over every split, for cross-checking the closed form.

use std::ops::RangeInclusive;

use tracing::{info, warn};

use crate::config::{MAX_VERIFY_SPAN, MAX_VERIFY_VALUE};
use crate::error::{Result, SplitterError};
use crate::splitter::{digit_sum, max_digit_sum, Split};

/// A value where the closed form and exhaustive search disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub n: u64,
    pub closed_form: u64,
    pub exhaustive: u64,
}

/// Result of [`verify_range`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub checked: u64,
    pub first_mismatch: Option<Mismatch>,
}

impl VerifyReport {
    pub fn is_success(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

/// The split with the largest digit sum, found by trying every `a` in `0..=n`.
///
/// Ties keep the smallest `a`. O(n).
pub fn brute_force_split(n: u64) -> Split {
    let mut best = Split { a: 0, b: n };
    let mut best_sum = digit_sum(n);
    for a in 1..=n {
        let split = Split { a, b: n - a };
        let sum = split.digit_sum();
        if sum > best_sum {
            best = split;
            best_sum = sum;
        }
    }
    best
}

/// Maximum digit sum over all splits by exhaustive search.
///
/// # Examples
/// ```
/// use digitsplit::{brute_force_max, max_digit_sum};
///
/// assert_eq!(brute_force_max(35), max_digit_sum(35));
/// ```
pub fn brute_force_max(n: u64) -> u64 {
    brute_force_split(n).digit_sum()
}

/// Compare [`max_digit_sum`] against [`brute_force_max`] for every `n` in `range`.
///
/// Stops at the first mismatch.
pub fn verify_range(range: RangeInclusive<u64>) -> Result<VerifyReport> {
    verify_range_against(range, max_digit_sum)
}

/// Compare an arbitrary closed form against [`brute_force_max`] for every `n` in `range`.
///
/// Rejects ranges that are reversed, wider than [`MAX_VERIFY_SPAN`] values,
/// or reach past [`MAX_VERIFY_VALUE`].
pub fn verify_range_against<F>(
    range: RangeInclusive<u64>,
    formula: F,
) -> Result<VerifyReport>
where
    F: Fn(u64) -> u64,
{
    let (from, to) = (*range.start(), *range.end());
    if from > to || to > MAX_VERIFY_VALUE || to - from >= MAX_VERIFY_SPAN {
        return Err(SplitterError::InvalidRange { from, to });
    }

    let mut checked = 0;
    for n in range {
        checked += 1;
        let closed_form = formula(n);
        let exhaustive = brute_force_max(n);
        if closed_form != exhaustive {
            warn!(n, closed_form, exhaustive, "closed form disagrees with search");
            return Ok(VerifyReport {
                checked,
                first_mismatch: Some(Mismatch {
                    n,
                    closed_form,
                    exhaustive,
                }),
            });
        }
    }

    info!(from, to, checked, "closed form verified");
    Ok(VerifyReport {
        checked,
        first_mismatch: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_brute_force_known_cases() {
        assert_eq!(brute_force_max(0), 0);
        assert_eq!(brute_force_max(9), 9);
        assert_eq!(brute_force_max(10), 10);
        assert_eq!(brute_force_max(19), 10);
        assert_eq!(brute_force_max(100), 19);
    }

    #[test]
    fn test_brute_force_split_sums_to_n() {
        for n in [0, 1, 10, 57, 300] {
            assert_eq!(brute_force_split(n).total(), n);
        }
    }

    #[test]
    fn test_verify_small_range() {
        let report = verify_range(0..=2_000).unwrap();
        assert_eq!(report.checked, 2_001);
        assert!(report.is_success());
    }

    #[test]
    fn test_verify_single_value() {
        let report = verify_range(100..=100).unwrap();
        assert_eq!(report.checked, 1);
        assert_eq!(report.first_mismatch, None);
    }

    #[test]
    fn test_verify_rejects_reversed_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let result = verify_range(10..=5);
        assert!(matches!(
            result,
            Err(SplitterError::InvalidRange { from: 10, to: 5 })
        ));
    }

    #[test]
    fn test_verify_rejects_wide_range() {
        assert!(matches!(
            verify_range(0..=MAX_VERIFY_SPAN),
            Err(SplitterError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_values_past_limit() {
        let huge = 1_000_000_000_000;
        assert!(matches!(
            verify_range(huge..=huge),
            Err(SplitterError::InvalidRange { from, to }) if from == huge && to == huge
        ));
        assert!(verify_range(MAX_VERIFY_VALUE..=MAX_VERIFY_VALUE + 1).is_err());
    }

    #[test]
    fn test_verify_accepts_limit_value() {
        let report = verify_range(MAX_VERIFY_VALUE..=MAX_VERIFY_VALUE).unwrap();
        assert!(report.is_success());
    }

    #[test]
    fn test_verify_reports_first_mismatch() {
        // off by one at 42 and 50; only the first is reported
        let skewed = |n| max_digit_sum(n) + u64::from(n == 42 || n == 50);
        let report = verify_range_against(30..=60, skewed).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.checked, 13);
        assert_eq!(
            report.first_mismatch,
            Some(Mismatch {
                n: 42,
                closed_form: 16,
                exhaustive: 15,
            })
        );
    }
}
