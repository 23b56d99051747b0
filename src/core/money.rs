//! Integer Currency Amounts
//!
//! All balance and prize arithmetic runs on whole minor units (cents).
//! No binary floats ever touch currency, so repeated calls cannot drift.
//!
//! ## Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Amount(u64) = value in minor units                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "12.34"  <->  Amount(1234)                                  │
//! │  "0.05"   <->  Amount(5)                                     │
//! │  "7"      <->  Amount(700)                                   │
//! │                                                              │
//! │  Scale: 100 minor units per major unit (2 decimals)          │
//! │  Negative amounts are not representable                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minor units per major unit.
pub const MINOR_PER_MAJOR: u64 = 100;

/// Number of decimal places carried by an [`Amount`].
pub const AMOUNT_DECIMALS: usize = 2;

/// Non-negative currency amount in minor units.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

/// Errors raised when parsing or combining amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Empty input string.
    #[error("empty amount")]
    Empty,
    /// Input is not a plain decimal number.
    #[error("invalid amount: {0}")]
    Invalid(String),
    /// More decimal places than minor units can hold.
    #[error("amount has more than 2 decimal places: {0}")]
    TooPrecise(String),
    /// Result does not fit in 64 bits of minor units.
    #[error("amount overflow")]
    Overflow,
}

impl Amount {
    /// Zero constant
    pub const ZERO: Self = Self(0);

    /// Create from minor units (cents).
    #[inline]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Create from whole major units.
    ///
    /// For constants only; overflow fails const evaluation. Runtime values
    /// go through [`Amount::checked_from_major`].
    #[inline]
    pub const fn from_major(major: u64) -> Self {
        Self(major * MINOR_PER_MAJOR)
    }

    /// Create from whole major units. `None` on overflow.
    #[inline]
    pub fn checked_from_major(major: u64) -> Option<Self> {
        major.checked_mul(MINOR_PER_MAJOR).map(Self)
    }

    /// Value in minor units.
    #[inline]
    pub const fn minor(self) -> u64 {
        self.0
    }

    /// True when the amount is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction. `None` when `rhs > self`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Subtraction floored at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Multiply by a count (players, invite slots).
    #[inline]
    pub fn checked_mul(self, count: u64) -> Option<Self> {
        self.0.checked_mul(count).map(Self)
    }

    /// Multiply by a count, clamping at the maximum amount.
    #[inline]
    pub fn saturating_mul(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Compute `self * numer / denom`, rounded half up to the nearest
    /// minor unit.
    ///
    /// Uses a 128-bit intermediate so the product never overflows.
    /// Returns `None` when `denom` is zero or the result exceeds `u64`.
    pub fn mul_div_round(self, numer: u64, denom: u64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let wide = self.0 as u128 * numer as u128;
        let rounded = (wide + denom as u128 / 2) / denom as u128;
        u64::try_from(rounded).ok().map(Self)
    }
}

impl Add for Amount {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Amount {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, a| acc + a)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(AmountError::Invalid(s.to_string()));
        }
        if frac.len() > AMOUNT_DECIMALS {
            return Err(AmountError::TooPrecise(s.to_string()));
        }

        let major: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| AmountError::Overflow)?
        };
        let mut minor: u64 = if frac.is_empty() {
            0
        } else {
            frac.parse()
                .map_err(|_| AmountError::Invalid(s.to_string()))?
        };
        // "1.5" means 50 cents, not 5
        for _ in frac.len()..AMOUNT_DECIMALS {
            minor *= 10;
        }

        Self::checked_from_major(major)
            .and_then(|m| m.checked_add(Self(minor)))
            .ok_or(AmountError::Overflow)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({self})")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_PER_MAJOR,
            self.0 % MINOR_PER_MAJOR
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amounts() {
        assert_eq!("12.34".parse::<Amount>(), Ok(Amount::from_minor(1234)));
        assert_eq!("12.3".parse::<Amount>(), Ok(Amount::from_minor(1230)));
        assert_eq!("7".parse::<Amount>(), Ok(Amount::from_major(7)));
        assert_eq!("0.05".parse::<Amount>(), Ok(Amount::from_minor(5)));
        assert_eq!(".5".parse::<Amount>(), Ok(Amount::from_minor(50)));
        assert_eq!(" 3.00 ".parse::<Amount>(), Ok(Amount::from_minor(300)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Amount>(), Err(AmountError::Empty));
        assert!(matches!("-1".parse::<Amount>(), Err(AmountError::Invalid(_))));
        assert!(matches!("1.2.3".parse::<Amount>(), Err(AmountError::Invalid(_))));
        assert!(matches!("abc".parse::<Amount>(), Err(AmountError::Invalid(_))));
        assert!(matches!(".".parse::<Amount>(), Err(AmountError::Invalid(_))));
        assert!(matches!("1.234".parse::<Amount>(), Err(AmountError::TooPrecise(_))));
        assert_eq!(
            "999999999999999999999".parse::<Amount>(),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn test_checked_from_major() {
        assert_eq!(Amount::checked_from_major(7), Some(Amount::from_minor(700)));
        assert_eq!(Amount::checked_from_major(u64::MAX / 100), Some(Amount::from_minor(u64::MAX / 100 * 100)));
        assert_eq!(Amount::checked_from_major(u64::MAX / 10), None);
        assert_eq!(
            "184467440737095517".parse::<Amount>(),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_minor(1234).to_string(), "12.34");
        assert_eq!(Amount::from_minor(5).to_string(), "0.05");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
        assert_eq!(format!("{:?}", Amount::from_major(3)), "Amount(3.00)");
    }

    #[test]
    fn test_saturating_ops() {
        let a = Amount::from_major(5);
        let b = Amount::from_major(8);
        assert_eq!(a - b, Amount::ZERO);
        assert_eq!(b - a, Amount::from_major(3));
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(a + b, Amount::from_major(13));
    }

    #[test]
    fn test_mul_div_round_half_up() {
        // 10.00 * 125 / 1000 = 1.25
        assert_eq!(
            Amount::from_major(10).mul_div_round(125, 1000),
            Some(Amount::from_minor(125))
        );
        // 0.03 * 250 / 1000 = 0.0075 -> rounds to 0.01
        assert_eq!(
            Amount::from_minor(3).mul_div_round(250, 1000),
            Some(Amount::from_minor(1))
        );
        // 0.01 * 499 / 1000 = 0.00499 -> rounds to 0
        assert_eq!(Amount::from_minor(1).mul_div_round(499, 1000), Some(Amount::ZERO));
        assert_eq!(Amount::from_minor(1).mul_div_round(1, 0), None);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [1, 2, 3].into_iter().map(Amount::from_minor).sum();
        assert_eq!(total, Amount::from_minor(6));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Amount::from_minor(1234)).unwrap();
        assert_eq!(json, "1234");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Amount::from_minor(1234));
    }
}
