//! Concrete machines built on the runtime.
//!
//! | Machine | Protocol | Output |
//! |---|---|---|
//! | [`Accumulator`] | `Successor` | running total |
//! | [`Gain`] | `Successor` | input × k |
//! | [`UpDown`] | `Successor` | counter |
//! | [`Delay`] | `Transducer` | previous input |
//! | [`Average2`] | `Transducer` | mean of last two inputs |
//! | [`SimpleParkingGate`] | `Transducer` | motor command |
//! | [`VendingMachine`] | `Transducer` | receipt |

mod accumulator;
mod average;
mod delay;
mod gain;
mod parking_gate;
mod up_down;
mod vending;

pub use accumulator::Accumulator;
pub use average::Average2;
pub use delay::Delay;
pub use gain::Gain;
pub use parking_gate::{GateCommand, GatePosition, GateReading, GateState, SimpleParkingGate};
pub use up_down::UpDown;
pub use vending::{
    ConfigViolation, Money, ParseMoneyError, Receipt, Token, VendingConfig, VendingMachine,
    VendingState,
};
