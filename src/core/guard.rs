//! Guard predicates over machine inputs.
//!
//! Guards are pure boolean functions that decide whether a rule in a
//! transition table fires for a given input. The state half of the match is
//! handled by the rule itself.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over an input value.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use stepwise::core::Guard;
///
/// let positive = Guard::new(|n: &i32| *n > 0);
///
/// assert!(positive.check(&3));
/// assert!(!positive.check(&-1));
/// ```
pub struct Guard<I> {
    predicate: Arc<dyn Fn(&I) -> bool + Send + Sync>,
}

impl<I> Guard<I> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard accepts this input.
    pub fn check(&self, input: &I) -> bool {
        (self.predicate)(input)
    }
}

impl<I> Clone for Guard<I> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<I> fmt::Debug for Guard<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
