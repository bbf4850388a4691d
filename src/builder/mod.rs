//! Helpers for ergonomic table and state construction.
//!
//! This module provides rule constructors and macros for describing
//! table-driven machines with minimal boilerplate.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{Guard, State};
use crate::runtime::Rule;

/// Create a rule that fires only when the predicate accepts the input.
///
/// # Example
///
/// ```
/// use stepwise::builder::guarded_rule;
/// use stepwise::state_enum;
///
/// state_enum! {
///     enum Valve {
///         Shut,
///         Flowing,
///     }
/// }
///
/// let rule = guarded_rule(Valve::Shut, Valve::Flowing, |pressure: &u32| *pressure > 10);
/// assert!(rule.applies(&Valve::Shut, &20));
/// assert!(!rule.applies(&Valve::Shut, &5));
/// ```
pub fn guarded_rule<S, I, F>(from: S, to: S, guard: F) -> Rule<S, I>
where
    S: State,
    F: Fn(&I) -> bool + Send + Sync + 'static,
{
    Rule {
        from,
        to,
        guard: Some(Guard::new(guard)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum TestState {
            Middle,
            End,
        }
    }

    #[test]
    fn guarded_rule_respects_guard() {
        let rule = guarded_rule(TestState::Middle, TestState::End, |n: &u8| *n > 2);

        assert!(rule.applies(&TestState::Middle, &3));
        assert!(!rule.applies(&TestState::Middle, &1));
        assert!(!rule.applies(&TestState::End, &3));
    }
}
