//! Up/down counter driven by command characters.

use crate::runtime::Successor;

/// Counts up on `'u'` and down on any other character, starting at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpDown;

impl UpDown {
    pub const UP: char = 'u';

    pub fn new() -> Self {
        Self
    }
}

impl Successor for UpDown {
    type State = i64;
    type Input = char;

    fn start_state(&self) -> i64 {
        0
    }

    fn next_state(&mut self, state: &i64, input: &char) -> i64 {
        if *input == Self::UP {
            state + 1
        } else {
            state - 1
        }
    }
}
