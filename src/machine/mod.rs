//! Declarative state machine.
//!
//! # Key Concepts
//!
//! - **Rules**: `(guard, target)` pairs keyed by source state, tried in
//!   registration order
//! - **Step**: fires at most one transition per call
//! - **Observers**: leave/entry handlers held in per-state dispatchers

mod state_machine;
mod transition;

pub use state_machine::StateMachine;
pub use transition::{Transition, TransitionRule};
