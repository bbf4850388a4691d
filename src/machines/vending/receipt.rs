//! Vending machine outputs.

use super::money::Money;
use super::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the machine reports after each step. `Display` renders the
/// customer-facing message.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Receipt {
    AwaitingMoney,
    Credited { balance: Money, remaining: Money },
    Dispensed { paid: Money, change: Money },
    Cancelled { refund: Money },
    Rejected { token: Token, accepted: Vec<Money> },
}

impl Receipt {
    /// Whether the step reported an input outside the accepted domain.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Receipt::Rejected { .. })
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::AwaitingMoney => f.write_str("Waiting for money"),
            Receipt::Credited { balance, remaining } => write!(
                f,
                "Inserted {} dollars. Insert {} more to dispense.",
                balance, remaining
            ),
            Receipt::Dispensed { paid, change } => write!(
                f,
                "Inserted {} dollars. Dispensing drink. Returning {} dollars in change.",
                paid, change
            ),
            Receipt::Cancelled { refund } => {
                write!(f, "Transaction cancelled. Returning {} dollars.", refund)
            }
            Receipt::Rejected { token, accepted } => {
                let coins: Vec<String> = accepted.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Invalid input '{}'. Accepted coins: {}.",
                    token,
                    coins.join(", ")
                )
            }
        }
    }
}
