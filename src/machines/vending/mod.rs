//! Drink vending machine controller.
//!
//! The machine keeps a running balance next to its symbolic state. The
//! balance belongs to the machine instance, not to a run: it survives
//! `start()`, so coins inserted (or left over after a cancel) in one
//! `transduce` are still credited in the next.

mod config;
mod money;
mod receipt;
mod token;

pub use config::{ConfigViolation, VendingConfig};
pub use money::{Money, ParseMoneyError};
pub use receipt::Receipt;
pub use token::Token;

use crate::builder::BuildError;
use crate::runtime::Transducer;
use crate::state_enum;

state_enum! {
    pub enum VendingState {
        Waiting,
        Cancelled,
    }
}

/// What a token does to the machine, worked out before anything changes.
enum Decision {
    Idle,
    Cancel,
    Credit(Money),
    Dispense { paid: Money, change: Money },
    Reject,
}

impl Decision {
    fn next_state(&self, current: VendingState) -> VendingState {
        match self {
            Decision::Idle | Decision::Reject => current,
            Decision::Cancel => VendingState::Cancelled,
            Decision::Credit(_) | Decision::Dispense { .. } => VendingState::Waiting,
        }
    }
}

/// Sells one kind of drink for a fixed price.
///
/// # Example
///
/// ```rust
/// use stepwise::machines::{Receipt, Token, VendingMachine};
/// use stepwise::runtime::StateMachine;
///
/// let mut machine = StateMachine::new(VendingMachine::new());
/// let receipts = machine.transduce(vec![Token::from(1.0)]);
///
/// assert_eq!(
///     receipts[0].to_string(),
///     "Inserted 1.00 dollars. Dispensing drink. Returning 0.25 dollars in change."
/// );
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    config: VendingConfig,
    balance: Money,
}

impl VendingMachine {
    /// Machine with the default price and coin set.
    pub fn new() -> Self {
        Self {
            config: VendingConfig::default(),
            balance: Money::ZERO,
        }
    }

    pub fn with_config(config: VendingConfig) -> Result<Self, BuildError> {
        config.check()?;
        Ok(Self {
            config,
            balance: Money::ZERO,
        })
    }

    /// Money inserted and not yet spent or refunded.
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn config(&self) -> &VendingConfig {
        &self.config
    }

    fn decide(&self, token: &Token) -> Decision {
        match token {
            Token::Absent => Decision::Idle,
            Token::Cancel => Decision::Cancel,
            Token::Coin(coin) if self.config.accepts(*coin) => {
                // A coin the balance cannot hold is turned away like any other.
                let Some(balance) = self.balance.checked_add(*coin) else {
                    return Decision::Reject;
                };
                match balance.checked_sub(self.config.price) {
                    Some(change) => Decision::Dispense {
                        paid: balance,
                        change,
                    },
                    None => Decision::Credit(balance),
                }
            }
            Token::Coin(_) | Token::Unrecognized(_) => Decision::Reject,
        }
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl Transducer for VendingMachine {
    type State = VendingState;
    type Input = Token;
    type Output = Receipt;

    fn start_state(&self) -> VendingState {
        VendingState::Waiting
    }

    /// Successor state without touching the balance.
    fn next_state(&mut self, state: &VendingState, input: &Token) -> VendingState {
        self.decide(input).next_state(*state)
    }

    fn next_values(&mut self, state: &VendingState, input: Token) -> (VendingState, Receipt) {
        let decision = self.decide(&input);
        let next = decision.next_state(*state);

        let receipt = match decision {
            Decision::Idle => Receipt::AwaitingMoney,
            Decision::Cancel => {
                // The balance is reported but deliberately kept.
                tracing::debug!(stepwise.refund = %self.balance, "Transaction cancelled");
                Receipt::Cancelled {
                    refund: self.balance,
                }
            }
            Decision::Credit(balance) => {
                self.balance = balance;
                Receipt::Credited {
                    balance,
                    remaining: self.config.price.saturating_sub(balance),
                }
            }
            Decision::Dispense { paid, change } => {
                self.balance = Money::ZERO;
                tracing::debug!(
                    stepwise.paid = %paid,
                    stepwise.change = %change,
                    "Dispensing drink"
                );
                Receipt::Dispensed { paid, change }
            }
            Decision::Reject => {
                tracing::debug!(stepwise.input = %input, "Rejected vending input");
                Receipt::Rejected {
                    token: input,
                    accepted: self.config.accepted_coins.clone(),
                }
            }
        };

        (next, receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::StateMachine;

    fn cents(n: u64) -> Money {
        Money::from_cents(n)
    }

    fn coins(amounts: &[f64]) -> Vec<Token> {
        amounts.iter().copied().map(Token::from).collect()
    }

    #[test]
    fn three_quarters_dispense_and_clear_balance() {
        let mut machine = StateMachine::new(VendingMachine::new());

        let receipts = machine.transduce(coins(&[0.25, 0.25, 0.25]));

        assert_eq!(
            receipts,
            vec![
                Receipt::Credited {
                    balance: cents(25),
                    remaining: cents(50)
                },
                Receipt::Credited {
                    balance: cents(50),
                    remaining: cents(25)
                },
                Receipt::Dispensed {
                    paid: cents(75),
                    change: Money::ZERO
                },
            ]
        );
        assert_eq!(machine.machine().balance(), Money::ZERO);
        assert_eq!(machine.state(), Some(&VendingState::Waiting));
    }

    #[test]
    fn cancel_reports_balance_without_clearing_it() {
        let mut machine = StateMachine::new(VendingMachine::new());

        let receipts = machine.transduce(vec![Token::from(0.25), Token::Cancel]);

        assert_eq!(receipts[1], Receipt::Cancelled { refund: cents(25) });
        assert_eq!(machine.state(), Some(&VendingState::Cancelled));
        assert_eq!(machine.machine().balance(), cents(25));
    }

    #[test]
    fn balance_carries_into_the_next_transduce() {
        let mut machine = StateMachine::new(VendingMachine::new());
        machine.transduce(vec![Token::from(0.25), Token::Cancel]);

        let receipts = machine.transduce(coins(&[0.10, 1.00]));

        assert_eq!(
            receipts,
            vec![
                Receipt::Credited {
                    balance: cents(35),
                    remaining: cents(40)
                },
                Receipt::Dispensed {
                    paid: cents(135),
                    change: cents(60)
                },
            ]
        );
    }

    #[test]
    fn unaccepted_coin_is_rejected_without_side_effects() {
        let mut machine = StateMachine::new(VendingMachine::new());
        machine.start();
        machine.step(Token::from(0.10)).unwrap();

        let receipt = machine.step(Token::from(0.50)).unwrap();

        assert!(receipt.is_rejected());
        assert_eq!(machine.machine().balance(), cents(10));
        assert_eq!(machine.state(), Some(&VendingState::Waiting));
    }

    #[test]
    fn unrecognized_text_is_rejected() {
        let mut machine = StateMachine::new(VendingMachine::new());

        let receipts = machine.transduce(vec![Token::from("button")]);

        assert_eq!(
            receipts[0].to_string(),
            "Invalid input 'button'. Accepted coins: 1.00, 0.25, 0.10, 0.05."
        );
    }

    #[test]
    fn absent_input_waits_for_money() {
        let mut machine = StateMachine::new(VendingMachine::new());

        let receipts = machine.run(2);

        assert_eq!(receipts, vec![Receipt::AwaitingMoney, Receipt::AwaitingMoney]);
        assert_eq!(receipts[0].to_string(), "Waiting for money");
    }

    #[test]
    fn cancelled_machine_stays_cancelled_until_a_coin_arrives() {
        let mut machine = StateMachine::new(VendingMachine::new());
        machine.start();

        machine.step(Token::Cancel).unwrap();
        machine.step(Token::Absent).unwrap();
        assert_eq!(machine.state(), Some(&VendingState::Cancelled));

        machine.step(Token::from(0.05)).unwrap();
        assert_eq!(machine.state(), Some(&VendingState::Waiting));
    }

    #[test]
    fn many_small_coins_reach_the_price_exactly() {
        let mut machine = StateMachine::new(VendingMachine::new());
        let mut tokens = coins(&[0.10; 7]);
        tokens.push(Token::from(0.05));

        let receipts = machine.transduce(tokens);

        assert_eq!(
            receipts.last(),
            Some(&Receipt::Dispensed {
                paid: cents(75),
                change: Money::ZERO
            })
        );
    }

    #[test]
    fn next_state_does_not_touch_the_balance() {
        let mut vending = VendingMachine::new();

        let next = vending.next_state(&VendingState::Waiting, &Token::from(1.0));

        assert_eq!(next, VendingState::Waiting);
        assert_eq!(vending.balance(), Money::ZERO);
    }

    #[test]
    fn coins_off_the_cent_grid_are_rejected() {
        let mut machine = StateMachine::new(VendingMachine::new());
        machine.start();
        machine.step(Token::from(0.10)).unwrap();

        for dollars in [0.104, 0.0501] {
            let receipt = machine.step(Token::from(dollars)).unwrap();

            assert!(receipt.is_rejected());
            assert_eq!(machine.machine().balance(), cents(10));
        }
    }

    #[test]
    fn coin_that_would_overflow_the_balance_is_rejected() {
        let config = VendingConfig {
            price: cents(u64::MAX),
            accepted_coins: vec![cents(u64::MAX - 1)],
        };
        let mut machine = StateMachine::new(VendingMachine::with_config(config).unwrap());
        let coin = Token::Coin(cents(u64::MAX - 1));

        let receipts = machine.transduce(vec![coin.clone(), coin]);

        assert_eq!(
            receipts[0],
            Receipt::Credited {
                balance: cents(u64::MAX - 1),
                remaining: cents(1)
            }
        );
        assert!(receipts[1].is_rejected());
        assert_eq!(machine.machine().balance(), cents(u64::MAX - 1));
    }

    #[test]
    fn custom_price_is_honoured() {
        let config = VendingConfig {
            price: cents(150),
            ..VendingConfig::default()
        };
        let mut machine = StateMachine::new(VendingMachine::with_config(config).unwrap());

        let receipts = machine.transduce(coins(&[1.0, 1.0]));

        assert_eq!(
            receipts[1],
            Receipt::Dispensed {
                paid: cents(200),
                change: cents(50)
            }
        );
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = VendingConfig {
            price: Money::ZERO,
            accepted_coins: Vec::new(),
        };

        let err = VendingMachine::with_config(config).unwrap_err();

        assert!(matches!(
            err,
            BuildError::InvalidConfig { ref violations } if violations.len() == 2
        ));
    }
}
