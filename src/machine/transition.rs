//! Transition rules registered on a state machine.

use crate::core::{Guard, State};

/// A guarded rule scoped to one source state.
///
/// The registry keys rules by their source, so a rule only carries the guard
/// and the state it leads to.
#[derive(Debug)]
pub struct TransitionRule<S: State> {
    pub guard: Guard,
    pub to: S,
}

impl<S: State> TransitionRule<S> {
    pub fn new(guard: Guard, to: S) -> Self {
        Self { guard, to }
    }

    /// Evaluate the guard.
    pub fn is_satisfied(&self) -> bool {
        self.guard.check()
    }
}

/// A complete transition from one state to another, as produced by
/// [`TransitionBuilder`](crate::builder::TransitionBuilder).
#[derive(Debug)]
pub struct Transition<S: State> {
    pub from: S,
    pub to: S,
    pub guard: Guard,
}

impl<S: State> Transition<S> {
    /// Check if this transition would fire while the machine is in `current`.
    pub fn can_execute(&self, current: &S) -> bool {
        *current == self.from && self.guard.check()
    }

    /// Split into the registry key and the rule stored under it.
    pub fn into_rule(self) -> (S, TransitionRule<S>) {
        (self.from, TransitionRule::new(self.guard, self.to))
    }
}
