//! Core value types shared by the runtime and the concrete machines.
//!
//! - States via the `State` trait
//! - Guard predicates over inputs
//! - Step history recorded by a tracing driver
//! - Driver usage errors

mod error;
mod guard;
mod history;
mod state;

pub use error::MachineError;
pub use guard::Guard;
pub use history::{StepHistory, StepRecord};
pub use state::State;
