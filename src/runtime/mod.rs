//! The state-machine runtime.
//!
//! - **Protocol**: [`Transducer`] (state + output per step) and
//!   [`Successor`] (output is the next state)
//! - **Driver**: [`StateMachine`] implements `start`, `step`, `transduce`
//!   and `run` once, in terms of the protocol
//! - **Tables**: [`TransitionTable`] for machines described by guarded rules
//!
//! Driving is a strictly sequential fold over the inputs. For unbounded
//! input, call [`StateMachine::step`] directly or pull from
//! [`StateMachine::outputs`] and stop whenever you like.

mod machine;
mod table;
mod transducer;

pub use machine::{Outputs, StateMachine, DEFAULT_RUN_LENGTH};
pub use table::{Rule, TransitionTable};
pub use transducer::{Absent, Successor, Transducer};
