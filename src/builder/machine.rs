//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::State;
use crate::events::{Dispatcher, EventDispatcher};
use crate::machine::{StateMachine, Transition};
use std::fmt;

type Handler<S> = Box<dyn FnMut(S)>;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use autonex::builder::{StateMachineBuilder, TransitionBuilder};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// # fn main() -> Result<(), autonex::builder::BuildError> {
/// let mut machine = StateMachineBuilder::new()
///     .initial(Light::Red)
///     .transition(TransitionBuilder::new().from(Light::Red).to(Light::Green))?
///     .transition(TransitionBuilder::new().from(Light::Green).to(Light::Red))?
///     .track_history()
///     .build()?;
///
/// machine.step();
/// machine.step();
/// assert_eq!(machine.current_state(), &Light::Red);
/// assert_eq!(machine.history().map(|h| h.len()), Some(2));
/// # Ok(())
/// # }
/// ```
pub struct StateMachineBuilder<S: State + 'static> {
    initial: Option<S>,
    transitions: Vec<Transition<S>>,
    on_leave: Vec<(S, Handler<S>)>,
    on_entry: Vec<(S, Handler<S>)>,
    track_history: bool,
}

impl<S: State + 'static> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            on_leave: Vec::new(),
            on_entry: Vec::new(),
            track_history: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, keeping their order.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Observe the machine leaving `state`.
    pub fn on_leave<F>(mut self, state: S, handler: F) -> Self
    where
        F: FnMut(S) + 'static,
    {
        self.on_leave.push((state, Box::new(handler)));
        self
    }

    /// Observe the machine entering `state`.
    pub fn on_entry<F>(mut self, state: S, handler: F) -> Self
    where
        F: FnMut(S) + 'static,
    {
        self.on_entry.push((state, Box::new(handler)));
        self
    }

    /// Record performed transitions in the machine's history.
    pub fn track_history(mut self) -> Self {
        self.track_history = true;
        self
    }

    /// Build the state machine with the default dispatcher.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        self.build_with_dispatcher::<EventDispatcher<S>>()
    }

    /// Build the state machine with observers held by dispatchers of type `D`.
    pub fn build_with_dispatcher<D>(self) -> Result<StateMachine<S, D>, BuildError>
    where
        D: Dispatcher<S> + Default,
    {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::with_dispatcher(initial);
        if self.track_history {
            machine = machine.with_history();
        }
        for transition in self.transitions {
            machine.add_transition(transition);
        }
        for (state, handler) in self.on_leave {
            machine.bind_on_state_leave(state, handler);
        }
        for (state, handler) in self.on_entry {
            machine.bind_on_state_entry(state, handler);
        }

        Ok(machine)
    }
}

impl<S: State + 'static> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State + 'static> fmt::Debug for StateMachineBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachineBuilder")
            .field("initial", &self.initial)
            .field("transitions", &self.transitions.len())
            .field("on_leave", &self.on_leave.len())
            .field("on_entry", &self.on_entry.len())
            .field("track_history", &self.track_history)
            .finish()
    }
}
