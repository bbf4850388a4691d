//! Vending machine inputs.

use super::money::Money;
use crate::runtime::Absent;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One thing the customer can do in a time step.
///
/// Anything that is not a coin or a cancel request is carried as
/// `Unrecognized` so the machine can report it instead of failing.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Token {
    /// Nothing happened this step.
    Absent,
    Cancel,
    Coin(Money),
    Unrecognized(String),
}

impl Absent for Token {
    fn absent() -> Self {
        Token::Absent
    }
}

impl From<Money> for Token {
    fn from(amount: Money) -> Self {
        Token::Coin(amount)
    }
}

/// Largest distance from a whole cent still read as that cent.
const CENT_TOLERANCE: f64 = 1e-6;

impl From<f64> for Token {
    /// Amounts that are not a whole number of cents are kept as
    /// `Unrecognized`; no rounding is applied to make them fit a coin.
    fn from(dollars: f64) -> Self {
        let cents = dollars * 100.0;
        if (cents - cents.round()).abs() > CENT_TOLERANCE {
            return Token::Unrecognized(dollars.to_string());
        }
        Money::from_dollars(dollars)
            .map_or_else(|| Token::Unrecognized(dollars.to_string()), Token::Coin)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        match text.parse() {
            Ok(token) => token,
            Err(never) => match never {},
        }
    }
}

impl FromStr for Token {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let token = match trimmed.to_ascii_lowercase().as_str() {
            "" | "none" => Token::Absent,
            "cancel" => Token::Cancel,
            _ => trimmed
                .parse::<Money>()
                .map_or_else(|_| Token::Unrecognized(trimmed.to_string()), Token::Coin),
        };
        Ok(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Absent => f.write_str("nothing"),
            Token::Cancel => f.write_str("cancel"),
            Token::Coin(amount) => write!(f, "{}", amount),
            Token::Unrecognized(text) => f.write_str(text),
        }
    }
}
