//! Parking-lot gate controller.
//!
//! The gate raises when a car arrives, waits for the arm to reach the top,
//! holds until the car has driven through, then lowers back to the bottom.

use crate::builder::guarded_rule;
use crate::runtime::{Transducer, TransitionTable};
use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the gate arm currently is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GatePosition {
    Bottom,
    Middle,
    Top,
}

/// One sample of the gate's sensors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GateReading {
    pub position: GatePosition,
    pub car_at_gate: bool,
    pub car_just_exited: bool,
}

impl GateReading {
    pub fn new(position: GatePosition, car_at_gate: bool, car_just_exited: bool) -> Self {
        Self {
            position,
            car_at_gate,
            car_just_exited,
        }
    }
}

impl From<(GatePosition, bool, bool)> for GateReading {
    fn from((position, car_at_gate, car_just_exited): (GatePosition, bool, bool)) -> Self {
        Self::new(position, car_at_gate, car_just_exited)
    }
}

state_enum! {
    pub enum GateState {
        Waiting,
        Raising,
        Raised,
        Lowering,
    }
}

/// Motor command emitted each step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GateCommand {
    Raise,
    Lower,
    Nop,
}

impl From<GateState> for GateCommand {
    fn from(state: GateState) -> Self {
        match state {
            GateState::Raising => Self::Raise,
            GateState::Lowering => Self::Lower,
            GateState::Waiting | GateState::Raised => Self::Nop,
        }
    }
}

impl fmt::Display for GateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Raise => "raise",
            Self::Lower => "lower",
            Self::Nop => "nop",
        })
    }
}

/// Table-driven gate controller.
///
/// The command is derived from the state the step moves *into*, so the
/// step that reaches `Raised` already emits `nop`.
///
/// # Example
///
/// ```rust
/// use stepwise::machines::{GateCommand, GatePosition, GateReading, SimpleParkingGate};
/// use stepwise::runtime::StateMachine;
///
/// let mut gate = StateMachine::new(SimpleParkingGate::new());
/// let commands = gate.transduce(vec![
///     GateReading::new(GatePosition::Bottom, true, false),
///     GateReading::new(GatePosition::Top, true, false),
/// ]);
/// assert_eq!(commands, vec![GateCommand::Raise, GateCommand::Nop]);
/// ```
#[derive(Clone)]
pub struct SimpleParkingGate {
    table: TransitionTable<GateState, GateReading>,
    last_reading: Option<GateReading>,
}

impl SimpleParkingGate {
    pub fn new() -> Self {
        let table = TransitionTable::new(vec![
            guarded_rule(GateState::Waiting, GateState::Raising, |r: &GateReading| {
                r.car_at_gate
            }),
            guarded_rule(GateState::Raising, GateState::Raised, |r: &GateReading| {
                r.position == GatePosition::Top
            }),
            guarded_rule(GateState::Raised, GateState::Lowering, |r: &GateReading| {
                r.car_just_exited
            }),
            guarded_rule(GateState::Lowering, GateState::Waiting, |r: &GateReading| {
                r.position == GatePosition::Bottom
            }),
        ]);

        Self {
            table,
            last_reading: None,
        }
    }

    /// Most recent sensor sample seen during the current run.
    pub fn last_reading(&self) -> Option<&GateReading> {
        self.last_reading.as_ref()
    }
}

impl Default for SimpleParkingGate {
    fn default() -> Self {
        Self::new()
    }
}

impl Transducer for SimpleParkingGate {
    type State = GateState;
    type Input = GateReading;
    type Output = GateCommand;

    fn start_state(&self) -> GateState {
        GateState::Waiting
    }

    fn next_state(&mut self, state: &GateState, input: &GateReading) -> GateState {
        self.table.next(state, input)
    }

    fn next_values(&mut self, state: &GateState, input: GateReading) -> (GateState, GateCommand) {
        let next = self.next_state(state, &input);
        self.last_reading = Some(input);
        (next, GateCommand::from(next))
    }

    fn on_start(&mut self) {
        self.last_reading = None;
    }
}
