//! One-step delay line.

use crate::core::State;
use crate::runtime::Transducer;

/// Emits each input one step late. The first output is the configured
/// initial value.
///
/// # Example
///
/// ```rust
/// use stepwise::machines::Delay;
/// use stepwise::runtime::StateMachine;
///
/// let mut machine = StateMachine::new(Delay::new(7));
/// assert_eq!(machine.transduce(vec![3, 1, 2, 5, 9]), vec![7, 3, 1, 2, 5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Delay<T> {
    initial: T,
}

impl<T> Delay<T> {
    pub fn new(initial: T) -> Self {
        Self { initial }
    }
}

impl<T: State> Transducer for Delay<T> {
    type State = T;
    type Input = T;
    type Output = T;

    fn start_state(&self) -> T {
        self.initial.clone()
    }

    fn next_state(&mut self, _state: &T, input: &T) -> T {
        input.clone()
    }

    fn next_values(&mut self, state: &T, input: T) -> (T, T) {
        (input, state.clone())
    }
}
