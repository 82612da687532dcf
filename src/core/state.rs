//! Core State trait for state machine states.
//!
//! A state is any discrete value that can key a hash map. There is nothing to
//! implement: every `Clone + Eq + Hash + Debug` type is a state.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait bound for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are handed to leave/entry handlers by value
/// - `Eq` + `Hash`: states key the rule and event registries
/// - `Debug`: states appear in trace output
///
/// The trait is implemented for every type satisfying these bounds, so plain
/// enums, integers and strings all work.
///
/// # Example
///
/// ```rust
/// use autonex::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn takes_state<S: State>(_state: S) {}
///
/// takes_state(Door::Open);
/// takes_state(7_u8);
/// takes_state(String::from("idle"));
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}
