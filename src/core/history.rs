//! Step history tracking.
//!
//! A driver with tracing enabled records one [`StepRecord`] per step. The
//! history belongs to a single run: every `start()` begins a fresh history
//! under a new run id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single step.
///
/// `from` is the state the step began in, `to` the state the transition
/// produced and `output` the value emitted to the caller.
///
/// # Example
///
/// ```rust
/// use stepwise::core::StepRecord;
/// use chrono::Utc;
///
/// let record = StepRecord {
///     index: 0,
///     from: 0i64,
///     to: 5i64,
///     output: 5i64,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord<S, O> {
    /// Zero-based position of the step within its run
    pub index: usize,
    /// The state before the step
    pub from: S,
    /// The state after the step
    pub to: S,
    /// The output emitted by the step
    pub output: O,
    /// When the step was taken. Observational only.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the steps taken in one run.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{StepHistory, StepRecord};
/// use chrono::Utc;
///
/// let mut history = StepHistory::new(10i64);
/// history.push(StepRecord { index: 0, from: 10, to: 12, output: 12, timestamp: Utc::now() });
/// history.push(StepRecord { index: 1, from: 12, to: 11, output: 11, timestamp: Utc::now() });
///
/// assert_eq!(history.path(), vec![&10, &12, &11]);
/// assert_eq!(history.outputs(), vec![&12, &11]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepHistory<S, O> {
    run_id: Uuid,
    start: S,
    steps: Vec<StepRecord<S, O>>,
}

impl<S, O> StepHistory<S, O> {
    /// Create an empty history for a run beginning in `start`.
    pub fn new(start: S) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            start,
            steps: Vec::new(),
        }
    }

    /// Identifier of the run this history belongs to.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The state the run started from.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Append a step.
    pub fn push(&mut self, record: StepRecord<S, O>) {
        self.steps.push(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the start state followed by the `to` state of each step, so
    /// a history of `n` steps yields `n + 1` states.
    pub fn path(&self) -> Vec<&S> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// Outputs in the order they were emitted.
    pub fn outputs(&self) -> Vec<&O> {
        self.steps.iter().map(|step| &step.output).collect()
    }

    /// Time elapsed between the first and last recorded step.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded steps.
    pub fn steps(&self) -> &[StepRecord<S, O>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
