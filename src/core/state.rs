//! Core State trait for machine states.
//!
//! Every state a machine can occupy implements this trait, whether it is a
//! plain number (accumulators, delays) or a named symbol (gate and vending
//! controllers).

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Debug;

/// Trait for machine states.
///
/// States are plain values. The driver replaces them wholesale on every
/// step and never mutates one in place.
///
/// # Required Traits
///
/// - `Clone`: the driver hands the machine a reference and keeps the
///   successor, and traces keep copies of both
/// - `PartialEq`: rule tables match states by equality
/// - `Debug`: states appear in log events
/// - `Serialize` + `Deserialize`: traces are serializable
///
/// # Example
///
/// ```rust
/// use stepwise::core::State;
/// use serde::{Deserialize, Serialize};
/// use std::borrow::Cow;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl State for Light {
///     fn name(&self) -> Cow<'_, str> {
///         match self {
///             Self::Red => Cow::Borrowed("Red"),
///             Self::Green => Cow::Borrowed("Green"),
///         }
///     }
/// }
///
/// assert_eq!(Light::Green.name(), "Green");
/// assert_eq!(42i64.name(), "42");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Default implementation renders the `Debug` form, which is what value
    /// states such as integers want.
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self))
    }
}

macro_rules! value_states {
    ($($ty:ty),* $(,)?) => {
        $(impl State for $ty {})*
    };
}

value_states!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String);

impl<T: State> State for Option<T> {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Some(inner) => inner.name(),
            None => Cow::Borrowed("none"),
        }
    }
}

impl<A: State, B: State> State for (A, B) {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("({}, {})", self.0.name(), self.1.name()))
    }
}
