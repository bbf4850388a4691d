//! Running-sum machine.

use crate::core::State;
use crate::runtime::Successor;
use std::ops::Add;

/// Adds every input to its state and emits the new total.
///
/// # Example
///
/// ```rust
/// use stepwise::machines::Accumulator;
/// use stepwise::runtime::StateMachine;
///
/// let mut machine = StateMachine::new(Accumulator::default());
/// assert_eq!(
///     machine.transduce(vec![100, -3, 4, -123, 10]),
///     vec![100, 97, 101, -22, -12]
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator<T> {
    initial: T,
}

impl<T> Accumulator<T> {
    pub fn new(initial: T) -> Self {
        Self { initial }
    }
}

impl<T: Default> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Successor for Accumulator<T>
where
    T: State + Copy + Add<Output = T>,
{
    type State = T;
    type Input = T;

    fn start_state(&self) -> T {
        self.initial
    }

    fn next_state(&mut self, state: &T, input: &T) -> T {
        *state + *input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::StateMachine;

    #[test]
    fn accumulates_from_zero() {
        let mut machine = StateMachine::new(Accumulator::new(0i64));

        assert_eq!(
            machine.transduce(vec![100, -3, 4, -123, 10]),
            vec![100, 97, 101, -22, -12]
        );
        assert_eq!(machine.state(), Some(&-12));
    }

    #[test]
    fn accumulates_from_configured_initial_value() {
        let mut machine = StateMachine::new(Accumulator::new(10i32));

        assert_eq!(machine.transduce(vec![1, 2, 3]), vec![11, 13, 16]);
    }

    #[test]
    fn repeated_transduce_does_not_drift() {
        let mut machine = StateMachine::new(Accumulator::new(5u32));

        let first = machine.transduce(vec![1, 1]);
        let second = machine.transduce(vec![1, 1]);

        assert_eq!(first, vec![6, 7]);
        assert_eq!(first, second);
    }
}
