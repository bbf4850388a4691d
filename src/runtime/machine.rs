//! The driver that owns a machine's current state and feeds it inputs.

use crate::core::{MachineError, State, StepHistory, StepRecord};
use crate::runtime::transducer::{Absent, Transducer};
use chrono::Utc;
use std::any::type_name;

/// Number of absent inputs fed by [`StateMachine::run_default`].
pub const DEFAULT_RUN_LENGTH: usize = 10;

/// Generic driver over any [`Transducer`].
///
/// Holds the current state and implements `start`, `step`, `transduce`
/// and `run` once for every machine.
///
/// # Example
///
/// ```rust
/// use stepwise::machines::Accumulator;
/// use stepwise::runtime::StateMachine;
///
/// let mut machine = StateMachine::new(Accumulator::new(0));
/// assert_eq!(machine.transduce(vec![100, -3, 4]), vec![100, 97, 101]);
///
/// // Every transduce starts over from the start state.
/// assert_eq!(machine.transduce(vec![1]), vec![1]);
/// ```
pub struct StateMachine<M: Transducer> {
    machine: M,
    current: Option<M::State>,
    steps: usize,
    record_history: bool,
    history: Option<StepHistory<M::State, M::Output>>,
}

impl<M: Transducer> StateMachine<M> {
    /// Wrap a machine. No state is established until [`start`](Self::start).
    pub fn new(machine: M) -> Self {
        Self {
            machine,
            current: None,
            steps: 0,
            record_history: false,
            history: None,
        }
    }

    /// Record a [`StepHistory`] for every run from now on.
    pub fn traced(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Reset the current state to the machine's start state.
    ///
    /// Safe to call any number of times.
    pub fn start(&mut self) {
        let start = self.machine.start_state();
        self.machine.on_start();

        tracing::debug!(
            stepwise.machine = type_name::<M>(),
            stepwise.start = %start.name(),
            "Starting machine"
        );

        if self.record_history {
            self.history = Some(StepHistory::new(start.clone()));
        }
        self.current = Some(start);
        self.steps = 0;
    }

    /// Feed one input and return its output.
    ///
    /// Fails with [`MachineError::UninitializedState`] if `start()` has
    /// never been called on this driver.
    pub fn step(&mut self, input: M::Input) -> Result<M::Output, MachineError> {
        let Some(state) = self.current.take() else {
            tracing::warn!(
                stepwise.machine = type_name::<M>(),
                "Step attempted before start"
            );
            return Err(MachineError::UninitializedState {
                machine: type_name::<M>(),
            });
        };

        Ok(self.advance(state, input))
    }

    fn advance(&mut self, state: M::State, input: M::Input) -> M::Output {
        tracing::trace!(
            stepwise.step = self.steps,
            stepwise.state = %state.name(),
            stepwise.input = ?input,
            "Stepping machine"
        );

        let (next, output) = self.machine.next_values(&state, input);

        if let Some(history) = self.history.as_mut() {
            history.push(StepRecord {
                index: self.steps,
                from: state,
                to: next.clone(),
                output: output.clone(),
                timestamp: Utc::now(),
            });
        }

        self.current = Some(next);
        self.steps += 1;
        output
    }

    /// Start, then lazily step once per input as the iterator is pulled.
    ///
    /// Dropping the iterator early stops the run; the driver keeps the
    /// state reached so far.
    pub fn outputs<I>(&mut self, inputs: I) -> Outputs<'_, M, I::IntoIter>
    where
        I: IntoIterator<Item = M::Input>,
    {
        self.start();
        Outputs {
            driver: self,
            inputs: inputs.into_iter(),
        }
    }

    /// Start, then step once per input, collecting the outputs in order.
    pub fn transduce<I>(&mut self, inputs: I) -> Vec<M::Output>
    where
        I: IntoIterator<Item = M::Input>,
    {
        self.outputs(inputs).collect()
    }

    /// Transduce `n` absent inputs.
    pub fn run(&mut self, n: usize) -> Vec<M::Output>
    where
        M::Input: Absent,
    {
        self.transduce(std::iter::repeat_with(<M::Input as Absent>::absent).take(n))
    }

    /// [`run`](Self::run) with [`DEFAULT_RUN_LENGTH`] inputs.
    pub fn run_default(&mut self) -> Vec<M::Output>
    where
        M::Input: Absent,
    {
        self.run(DEFAULT_RUN_LENGTH)
    }

    /// Current state, if the driver has been started.
    pub fn state(&self) -> Option<&M::State> {
        self.current.as_ref()
    }

    pub fn start_state(&self) -> M::State {
        self.machine.start_state()
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    /// Steps taken since the last `start()`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// History of the current run, when tracing is enabled.
    pub fn history(&self) -> Option<&StepHistory<M::State, M::Output>> {
        self.history.as_ref()
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    pub fn into_inner(self) -> M {
        self.machine
    }
}

/// Lazy output stream returned by [`StateMachine::outputs`].
pub struct Outputs<'a, M: Transducer, I> {
    driver: &'a mut StateMachine<M>,
    inputs: I,
}

impl<M, I> Iterator for Outputs<'_, M, I>
where
    M: Transducer,
    I: Iterator<Item = M::Input>,
{
    type Item = M::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.inputs.next()?;
        // outputs() started the driver, so stepping cannot fail here.
        self.driver.step(input).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inputs.size_hint()
    }
}
