//! Table-driven successor rules.

use crate::core::{Guard, State};

/// One row of a transition table: move `from` -> `to` when the guard
/// accepts the input. A rule without a guard always fires from `from`.
pub struct Rule<S: State, I> {
    pub from: S,
    pub to: S,
    pub guard: Option<Guard<I>>,
}

impl<S: State, I> Rule<S, I> {
    /// Check if this rule fires for the current state and input (pure)
    pub fn applies(&self, current: &S, input: &I) -> bool {
        if *current != self.from {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(input))
    }
}

impl<S: State, I> Clone for Rule<S, I> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

/// Ordered list of rules. The first rule that applies wins; when none
/// does, the state is unchanged.
///
/// # Example
///
/// ```rust
/// use stepwise::builder::guarded_rule;
/// use stepwise::runtime::TransitionTable;
///
/// let table = TransitionTable::new(vec![
///     guarded_rule(0u8, 1u8, |coin: &bool| *coin),
///     guarded_rule(1u8, 0u8, |push: &bool| !*push),
/// ]);
///
/// assert_eq!(table.next(&0, &true), 1);
/// assert_eq!(table.next(&0, &false), 0);
/// assert_eq!(table.next(&1, &false), 0);
/// ```
pub struct TransitionTable<S: State, I> {
    rules: Vec<Rule<S, I>>,
}

impl<S: State, I> TransitionTable<S, I> {
    pub fn new(rules: Vec<Rule<S, I>>) -> Self {
        Self { rules }
    }

    /// Successor of `current` under `input`.
    pub fn next(&self, current: &S, input: &I) -> S {
        self.rules
            .iter()
            .find(|rule| rule.applies(current, input))
            .map_or_else(|| current.clone(), |rule| rule.to.clone())
    }
}

impl<S: State, I> Clone for TransitionTable<S, I> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}
