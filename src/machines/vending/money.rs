//! Fixed-point money in whole cents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// A non-negative amount of money stored as integer cents, so repeated
/// small additions never drift. Displays with two decimals.
///
/// # Example
///
/// ```rust
/// use stepwise::machines::Money;
///
/// let total = Money::from_cents(25) + "0.10".parse::<Money>().unwrap();
/// assert_eq!(total.to_string(), "0.35");
/// assert_eq!(Money::from_dollars(1.0), Some(Money::from_cents(100)));
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Convert a dollar amount, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, non-finite or out-of-range amounts.
    pub fn from_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() || dollars < 0.0 {
            return None;
        }
        let cents = (dollars * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Money(cents as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Errors from parsing a decimal money string.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseMoneyError {
    #[error("Empty amount")]
    Empty,

    #[error("Malformed amount '{0}'")]
    Malformed(String),

    #[error("Amount '{0}' has more than two decimal places")]
    TooPrecise(String),

    #[error("Amount '{0}' is too large")]
    Overflow(String),
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses `"1"`, `"1.5"`, `"0.25"`, `".05"` and an optional leading `$`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);
        if amount.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let malformed = || ParseMoneyError::Malformed(s.to_string());
        let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty())
        {
            return Err(malformed());
        }
        if fraction.len() > 2 {
            return Err(ParseMoneyError::TooPrecise(s.to_string()));
        }

        let overflow = || ParseMoneyError::Overflow(s.to_string());
        let dollars: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| malformed())? * 10,
            _ => fraction.parse().map_err(|_| malformed())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(overflow)
    }
}
