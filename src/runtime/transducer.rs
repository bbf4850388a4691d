//! The transition protocol every machine implements.

use crate::core::State;
use std::fmt::Debug;

/// A discrete-time transducer: given the current state and one input it
/// produces the successor state and one output.
///
/// The driver owns the current state and calls [`next_values`] exactly once
/// per step. Machines may keep auxiliary fields on `self` (a running
/// balance, the last sensor reading) and update them while computing a
/// step, as long as the result depends only on the state, the input and
/// those fields.
///
/// Machines whose output is simply their next state should implement
/// [`Successor`] instead; the blanket impl below supplies `next_values`.
///
/// [`next_values`]: Transducer::next_values
pub trait Transducer {
    type State: State;
    type Input: Debug;
    type Output: Clone + Debug;

    /// State the driver resets to on every `start()`.
    fn start_state(&self) -> Self::State;

    /// Successor state only.
    fn next_state(&mut self, state: &Self::State, input: &Self::Input) -> Self::State;

    /// Successor state and the output emitted for this step.
    fn next_values(&mut self, state: &Self::State, input: Self::Input)
        -> (Self::State, Self::Output);

    /// Called by the driver's `start()`. Machines reset per-run auxiliary
    /// fields here; the default keeps everything.
    fn on_start(&mut self) {}
}

/// Machines whose output equals their next state.
///
/// # Example
///
/// ```rust
/// use stepwise::runtime::{StateMachine, Successor};
///
/// struct Doubler;
///
/// impl Successor for Doubler {
///     type State = i64;
///     type Input = i64;
///
///     fn start_state(&self) -> i64 {
///         1
///     }
///
///     fn next_state(&mut self, state: &i64, input: &i64) -> i64 {
///         state * 2 + input
///     }
/// }
///
/// let mut machine = StateMachine::new(Doubler);
/// assert_eq!(machine.transduce(vec![0, 1, 0]), vec![2, 5, 10]);
/// ```
pub trait Successor {
    type State: State;
    type Input: Debug;

    fn start_state(&self) -> Self::State;

    fn next_state(&mut self, state: &Self::State, input: &Self::Input) -> Self::State;

    fn on_start(&mut self) {}
}

impl<M: Successor> Transducer for M {
    type State = M::State;
    type Input = M::Input;
    type Output = M::State;

    fn start_state(&self) -> Self::State {
        Successor::start_state(self)
    }

    fn next_state(&mut self, state: &Self::State, input: &Self::Input) -> Self::State {
        Successor::next_state(self, state, input)
    }

    fn next_values(&mut self, state: &Self::State, input: Self::Input) -> (Self::State, Self::State) {
        let next = Successor::next_state(self, state, &input);
        (next.clone(), next)
    }

    fn on_start(&mut self) {
        Successor::on_start(self)
    }
}

/// Input types with a distinguished "no input" value.
///
/// Only machines whose input implements this can be driven by
/// `StateMachine::run`, which feeds nothing but absent markers.
pub trait Absent {
    fn absent() -> Self;
}

impl<T> Absent for Option<T> {
    fn absent() -> Self {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        from: u32,
    }

    impl Successor for Countdown {
        type State = u32;
        type Input = Option<()>;

        fn start_state(&self) -> u32 {
            self.from
        }

        fn next_state(&mut self, state: &u32, _input: &Option<()>) -> u32 {
            state.saturating_sub(1)
        }
    }

    #[test]
    fn successor_output_defaults_to_next_state() {
        let mut machine = Countdown { from: 3 };
        let state = Transducer::start_state(&machine);
        let (next, output) = machine.next_values(&state, None);

        assert_eq!(next, 2);
        assert_eq!(output, 2);
    }

    #[test]
    fn next_state_and_next_values_agree_for_successors() {
        let mut machine = Countdown { from: 1 };
        let by_state = Transducer::next_state(&mut machine, &1, &None);
        let (by_values, _) = machine.next_values(&1, None);

        assert_eq!(by_state, by_values);
    }

    #[test]
    fn absent_option_is_none() {
        assert_eq!(Option::<u8>::absent(), None);
    }
}
