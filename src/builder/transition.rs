//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
///
/// A transition without a guard always fires.
#[derive(Debug)]
pub struct TransitionBuilder<S: State> {
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard>,
}

impl<S: State> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            to,
            guard: self.guard.unwrap_or_else(Guard::always),
        })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Alive,
        Injured,
        Dead,
    }

    #[test]
    fn builder_validates_missing_from() {
        let result = TransitionBuilder::<TestState>::new()
            .to(TestState::Injured)
            .build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_validates_missing_to() {
        let result = TransitionBuilder::<TestState>::new()
            .from(TestState::Alive)
            .build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn transition_without_guard_always_fires() {
        let transition = TransitionBuilder::new()
            .from(TestState::Injured)
            .to(TestState::Dead)
            .build()
            .unwrap();

        assert_eq!(transition.from, TestState::Injured);
        assert_eq!(transition.to, TestState::Dead);
        assert!(transition.can_execute(&TestState::Injured));
    }

    #[test]
    fn transition_builder_with_guard() {
        let health = Rc::new(Cell::new(100));
        let h = Rc::clone(&health);
        let transition = TransitionBuilder::new()
            .from(TestState::Alive)
            .to(TestState::Injured)
            .when(move || h.get() < 50)
            .build()
            .unwrap();

        assert!(!transition.can_execute(&TestState::Alive));
        health.set(10);
        assert!(transition.can_execute(&TestState::Alive));
    }

    #[test]
    fn explicit_guard_is_kept() {
        let transition = TransitionBuilder::new()
            .from(TestState::Alive)
            .to(TestState::Dead)
            .guard(Guard::new(|| false))
            .build()
            .unwrap();

        assert!(!transition.can_execute(&TestState::Alive));
    }
}
