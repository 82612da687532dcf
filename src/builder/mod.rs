//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and a state-declaration macro for
//! setting up machines with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Guard, State};
use crate::machine::Transition;

/// Create an unconditional transition.
///
/// # Example
///
/// ```
/// use autonex::builder::simple_transition;
/// use autonex::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let transition = simple_transition(MyState::Start, MyState::End);
/// assert!(transition.can_execute(&MyState::Start));
/// ```
pub fn simple_transition<S: State>(from: S, to: S) -> Transition<S> {
    Transition {
        from,
        to,
        guard: Guard::always(),
    }
}

/// Create a transition with a guard predicate.
///
/// # Example
///
/// ```
/// use autonex::builder::guarded_transition;
/// use autonex::state_enum;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         Middle,
///     }
/// }
///
/// let ready = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&ready);
/// let transition = guarded_transition(MyState::Start, MyState::Middle, move || flag.get());
///
/// assert!(!transition.can_execute(&MyState::Start));
/// ready.set(true);
/// assert!(transition.can_execute(&MyState::Start));
/// ```
pub fn guarded_transition<S, F>(from: S, to: S, guard: F) -> Transition<S>
where
    S: State,
    F: Fn() -> bool + 'static,
{
    Transition {
        from,
        to,
        guard: Guard::new(guard),
    }
}
