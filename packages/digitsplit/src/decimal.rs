//! Arbitrary-precision non-negative decimal numbers.
//!
//! Only the handful of operations the split needs: parsing, digit sums and
//! the "subtract the all-9s candidate" step. Digits are stored most
//! significant first with no leading zeros (zero is a single `0` digit).

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::validate_digits;
use crate::error::{Result, SplitterError};

/// A non-negative integer of any length in base 10.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    digits: Vec<u8>,
}

/// An ordered pair `(a, b)` with `a + b = n`, for [`Decimal`] inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalSplit {
    pub a: Decimal,
    pub b: Decimal,
}

impl DecimalSplit {
    pub fn digit_sum(&self) -> u64 {
        self.a.digit_sum() + self.b.digit_sum()
    }
}

impl Decimal {
    pub fn zero() -> Self {
        Decimal { digits: vec![0] }
    }

    /// The number written as `count` nines; zero when `count` is 0.
    pub fn nines(count: usize) -> Self {
        if count == 0 {
            return Self::zero();
        }
        Decimal {
            digits: vec![9; count],
        }
    }

    /// Build from raw digit values, most significant first.
    fn from_digits(mut digits: Vec<u8>) -> Self {
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        if leading == digits.len() {
            return Self::zero();
        }
        digits.drain(..leading);
        Decimal { digits }
    }

    /// Number of decimal digits (1 for zero).
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    pub fn digit_sum(&self) -> u64 {
        self.digits.iter().map(|&d| u64::from(d)).sum()
    }

    /// Value as `u64`, or `None` when it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits.iter().try_fold(0u64, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u64::from(d))
        })
    }

    /// `self - (10^(len-1) - 1)`, i.e. drop one from the leading digit and add one.
    ///
    /// Only meaningful for numbers with at least two digits.
    fn minus_candidate(&self) -> Decimal {
        debug_assert!(self.digit_count() >= 2);
        let mut digits = self.digits.clone();
        digits[0] -= 1;

        // leading digit is 1..=9, so the +1 carry always terminates
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                break;
            }
        }
        Self::from_digits(digits)
    }
}

impl From<u64> for Decimal {
    fn from(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut digits = Vec::new();
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        digits.reverse();
        Decimal { digits }
    }
}

impl FromStr for Decimal {
    type Err = SplitterError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = validate_digits(s)?;
        Ok(Self::from_digits(digits.bytes().map(|b| b - b'0').collect()))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// The maximizing split for an arbitrary-length `n`.
pub fn best_split_decimal(n: &Decimal) -> DecimalSplit {
    if n.digit_count() < 2 {
        return DecimalSplit {
            a: n.clone(),
            b: Decimal::zero(),
        };
    }

    let split = DecimalSplit {
        a: Decimal::nines(n.digit_count() - 1),
        b: n.minus_candidate(),
    };
    debug!(digits = n.digit_count(), b = %split.b, "chose decimal split");
    split
}

/// [`max_digit_sum`](crate::max_digit_sum) for inputs of any length.
///
/// # Examples
/// ```
/// use digitsplit::{max_digit_sum_decimal, Decimal};
///
/// let n: Decimal = "100000000000000000000000000000".parse().unwrap();
/// assert_eq!(max_digit_sum_decimal(&n), 9 * 29 + 1);
/// ```
pub fn max_digit_sum_decimal(n: &Decimal) -> u64 {
    best_split_decimal(n).digit_sum()
}
