//! Event dispatch used by the state machine to notify observers.
//!
//! The machine only depends on the [`Dispatcher`] trait; [`EventDispatcher`]
//! is the implementation it uses unless told otherwise.

mod dispatcher;

pub use dispatcher::{Dispatcher, EventDispatcher};
