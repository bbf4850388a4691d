//! Vending machine configuration and its validation.
//!
//! Validation uses Stillwater's `Validation` so every problem with a
//! configuration is reported at once instead of one per attempt.

use super::money::Money;
use crate::builder::BuildError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Drink price and the coins the machine takes.
///
/// Missing fields fall back to the defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use stepwise::machines::{Money, VendingConfig};
///
/// let config = VendingConfig::default();
/// assert_eq!(config.price, Money::from_cents(75));
/// assert!(config.accepts(Money::from_cents(25)));
/// assert!(!config.accepts(Money::from_cents(50)));
/// assert!(config.check().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendingConfig {
    pub price: Money,
    pub accepted_coins: Vec<Money>,
}

impl Default for VendingConfig {
    fn default() -> Self {
        Self {
            price: Money::from_cents(75),
            accepted_coins: vec![
                Money::from_cents(100),
                Money::from_cents(25),
                Money::from_cents(10),
                Money::from_cents(5),
            ],
        }
    }
}

/// Problems a configuration can have.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Price must be greater than zero")]
    ZeroPrice,

    #[error("At least one coin must be accepted")]
    NoCoins,

    #[error("Coin denominations must be greater than zero")]
    ZeroCoin,

    #[error("Coin {coin} is listed more than once")]
    DuplicateCoin { coin: Money },
}

impl VendingConfig {
    pub fn accepts(&self, coin: Money) -> bool {
        self.accepted_coins.contains(&coin)
    }

    /// Validate the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.price.is_zero() {
            Validation::fail(ConfigViolation::ZeroPrice)
        } else {
            Validation::success(())
        });

        checks.push(if self.accepted_coins.is_empty() {
            Validation::fail(ConfigViolation::NoCoins)
        } else {
            Validation::success(())
        });

        checks.push(if self.accepted_coins.iter().any(|coin| coin.is_zero()) {
            Validation::fail(ConfigViolation::ZeroCoin)
        } else {
            Validation::success(())
        });

        let mut seen = BTreeSet::new();
        let mut reported = BTreeSet::new();
        for coin in &self.accepted_coins {
            if !seen.insert(*coin) && reported.insert(*coin) {
                checks.push(Validation::fail(ConfigViolation::DuplicateCoin {
                    coin: *coin,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate), as a `Result` for `?` propagation.
    pub fn check(&self) -> Result<(), BuildError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(BuildError::InvalidConfig {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}
