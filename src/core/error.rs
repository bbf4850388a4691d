//! Driver usage errors.

use thiserror::Error;

/// Errors surfaced by the driver to its caller.
///
/// Bad *domain* input is never reported here: machines answer it through
/// their output channel. These errors mean the harness used the driver
/// incorrectly.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    #[error("Machine '{machine}' was stepped before start() established its state")]
    UninitializedState { machine: &'static str },
}
