//! Two-sample moving average.

use crate::runtime::Transducer;

/// Emits the mean of the current input and the previous one.
///
/// The state is the previous input, starting at 0.
///
/// # Example
///
/// ```rust
/// use stepwise::machines::Average2;
/// use stepwise::runtime::StateMachine;
///
/// let mut machine = StateMachine::new(Average2::new());
/// assert_eq!(
///     machine.transduce(vec![10.0, 5.0, 2.0, 10.0]),
///     vec![5.0, 7.5, 3.5, 6.0]
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Average2;

impl Average2 {
    pub fn new() -> Self {
        Self
    }
}

impl Transducer for Average2 {
    type State = f64;
    type Input = f64;
    type Output = f64;

    fn start_state(&self) -> f64 {
        0.0
    }

    fn next_state(&mut self, _state: &f64, input: &f64) -> f64 {
        *input
    }

    fn next_values(&mut self, state: &f64, input: f64) -> (f64, f64) {
        (input, (input + state) / 2.0)
    }
}
