//! Core state machine types.
//!
//! This module contains the building blocks shared by the machine and its
//! builders:
//! - The `State` bound every state type satisfies
//! - Guard predicates for transition control
//! - Optional transition history

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
