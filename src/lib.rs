//! Stepwise: a discrete-time state-machine runtime
//!
//! Every machine, from a stateless gain to a vending controller with a
//! running balance, is driven through the same `start` / `step` /
//! `transduce` / `run` contract. Machines only describe transitions; the
//! [`StateMachine`] driver owns the current state and does the iteration.
//!
//! # Core Concepts
//!
//! - **State**: plain values via the `State` trait, replaced wholesale each step
//! - **Transducer**: `(state, input) -> (next state, output)`
//! - **Successor**: shorthand for machines whose output is their next state
//! - **Soft failure**: machines report bad input through their output, never
//!   by erroring
//!
//! # Example
//!
//! ```rust
//! use stepwise::machines::{Delay, Token, VendingMachine};
//! use stepwise::StateMachine;
//!
//! let mut delay = StateMachine::new(Delay::new(7));
//! assert_eq!(delay.transduce(vec![3, 1, 2]), vec![7, 3, 1]);
//!
//! let mut vending = StateMachine::new(VendingMachine::new());
//! let receipts = vending.transduce(vec![Token::from(0.25), Token::from("cancel")]);
//! assert_eq!(
//!     receipts[1].to_string(),
//!     "Transaction cancelled. Returning 0.25 dollars."
//! );
//! ```

pub mod builder;
pub mod core;
pub mod machines;
pub mod runtime;

// Re-export commonly used types
pub use crate::core::{Guard, MachineError, State, StepHistory, StepRecord};
pub use crate::runtime::{Absent, StateMachine, Successor, Transducer, TransitionTable};
