//! Build errors for configured machines.

use crate::machines::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a configured machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid configuration: {}", describe(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
