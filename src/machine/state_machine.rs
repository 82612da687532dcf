//! Guarded state machine with leave/entry notification.

use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::events::{Dispatcher, EventDispatcher};
use crate::machine::transition::{Transition, TransitionRule};
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;

/// State machine driven by guarded transition rules.
///
/// Rules are keyed by source state and tried in the order they were added.
/// Each [`step`](Self::step) fires at most one transition: the first rule for
/// the current state whose guard passes.
///
/// Leave handlers registered on a state receive the state being entered; entry
/// handlers registered on a state receive the state that was left.
///
/// # Example
///
/// ```rust
/// use autonex::machine::StateMachine;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Life {
///     Alive,
///     Injured,
/// }
///
/// let health = Rc::new(Cell::new(100));
/// let mut machine = StateMachine::new(Life::Alive);
///
/// let h = Rc::clone(&health);
/// machine.add_transition_rule(Life::Alive, Life::Injured, move || h.get() < 50);
///
/// assert!(!machine.step());
/// health.set(20);
/// assert!(machine.step());
/// assert_eq!(machine.current_state(), &Life::Injured);
/// ```
pub struct StateMachine<S: State, D = EventDispatcher<S>> {
    current: S,
    rules: HashMap<S, Vec<TransitionRule<S>>>,
    on_leave: HashMap<S, D>,
    on_entry: HashMap<S, D>,
    history: Option<StateHistory<S>>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial` using the default [`EventDispatcher`].
    pub fn new(initial: S) -> Self {
        Self::with_dispatcher(initial)
    }
}

impl<S, D> StateMachine<S, D>
where
    S: State,
    D: Dispatcher<S> + Default,
{
    /// Create a machine in `initial` whose observers are held by dispatchers
    /// of type `D`.
    pub fn with_dispatcher(initial: S) -> Self {
        Self {
            current: initial,
            rules: HashMap::new(),
            on_leave: HashMap::new(),
            on_entry: HashMap::new(),
            history: None,
        }
    }

    /// Record every performed transition from now on.
    pub fn with_history(mut self) -> Self {
        self.history.get_or_insert_with(StateHistory::new);
        self
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Overwrite the current state without evaluating guards or firing events.
    pub fn force_set_current_state(&mut self, state: S) {
        tracing::trace!(from = ?self.current, to = ?state, "forcing current state");
        self.current = state;
    }

    /// Register a rule taking the machine from `from` to `to` when `guard`
    /// returns true. Rules sharing a source state are tried in the order added.
    pub fn add_transition_rule<F>(&mut self, from: S, to: S, guard: F)
    where
        F: Fn() -> bool + 'static,
    {
        self.push_rule(from, TransitionRule::new(Guard::new(guard), to));
    }

    /// Register a pre-built transition.
    pub fn add_transition(&mut self, transition: Transition<S>) {
        let (from, rule) = transition.into_rule();
        self.push_rule(from, rule);
    }

    fn push_rule(&mut self, from: S, rule: TransitionRule<S>) {
        tracing::trace!(?from, to = ?rule.to, "adding transition rule");
        self.rules.entry(from).or_default().push(rule);
    }

    /// Observe the machine leaving `state`. The handler receives the state
    /// being entered.
    pub fn bind_on_state_leave<F>(&mut self, state: S, handler: F)
    where
        F: FnMut(S) + 'static,
    {
        self.on_leave.entry(state).or_default().subscribe(handler);
    }

    /// Observe the machine entering `state`. The handler receives the state
    /// that was left.
    pub fn bind_on_state_entry<F>(&mut self, state: S, handler: F)
    where
        F: FnMut(S) + 'static,
    {
        self.on_entry.entry(state).or_default().subscribe(handler);
    }

    /// Number of rules registered with `state` as their source.
    pub fn rule_count(&self, state: &S) -> usize {
        self.rules.get(state).map_or(0, Vec::len)
    }

    /// Transitions recorded so far, if history tracking is on.
    pub fn history(&self) -> Option<&StateHistory<S>> {
        self.history.as_ref()
    }

    /// Evaluate the rules for the current state and fire the first one whose
    /// guard passes.
    ///
    /// Order of effects: leave handlers of the old state (given the new
    /// state), state change, entry handlers of the new state (given the old
    /// state). Returns `false` and leaves the machine untouched when no guard
    /// passes or the current state has no rules.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.next_target() else {
            tracing::trace!(state = ?self.current, "no transition rule satisfied");
            return false;
        };

        if let Some(dispatcher) = self.on_leave.get_mut(&self.current) {
            dispatcher.dispatch(target.clone());
        }

        let previous = std::mem::replace(&mut self.current, target);
        tracing::debug!(from = ?previous, to = ?self.current, "state transition");

        if let Some(history) = self.history.as_mut() {
            history.record(StateTransition {
                from: previous.clone(),
                to: self.current.clone(),
                timestamp: Utc::now(),
            });
        }

        if let Some(dispatcher) = self.on_entry.get_mut(&self.current) {
            dispatcher.dispatch(previous);
        }

        true
    }

    fn next_target(&self) -> Option<S> {
        self.rules
            .get(&self.current)?
            .iter()
            .find(|rule| rule.is_satisfied())
            .map(|rule| rule.to.clone())
    }
}

impl<S: State, D> fmt::Debug for StateMachine<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("rules", &self.rules.values().map(Vec::len).sum::<usize>())
            .field("tracks_history", &self.history.is_some())
            .finish_non_exhaustive()
    }
}
