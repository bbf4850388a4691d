//! Stateless scaling machine.

use crate::core::State;
use crate::runtime::Successor;
use std::ops::Mul;

/// Emits every input multiplied by a fixed factor `k`.
///
/// The state only ever holds the latest output; the start state is
/// `T::default()` and is never read.
#[derive(Clone, Debug, PartialEq)]
pub struct Gain<T> {
    k: T,
}

impl<T> Gain<T> {
    pub fn new(k: T) -> Self {
        Self { k }
    }

    pub fn factor(&self) -> &T {
        &self.k
    }
}

impl<T> Successor for Gain<T>
where
    T: State + Copy + Default + Mul<Output = T>,
{
    type State = T;
    type Input = T;

    fn start_state(&self) -> T {
        T::default()
    }

    fn next_state(&mut self, _state: &T, input: &T) -> T {
        *input * self.k
    }
}
