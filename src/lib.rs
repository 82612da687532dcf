//! Autonex: engine building blocks for simulation loops
//!
//! Two independent components meant to be driven from a single-threaded
//! update loop:
//!
//! - **Object pool**: [`ObjectPool`] stores values in reusable slots and hands
//!   out generational [`Handle`]s that are checked on every access
//! - **State machine**: [`StateMachine`] evaluates guarded transition rules in
//!   registration order and notifies leave/entry observers
//!
//! Neither component locks or allocates per access. Share them across threads
//! only behind a lock owned by the caller.
//!
//! # Example
//!
//! ```rust
//! use autonex::{state_enum, ObjectPool, StateMachine};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! state_enum! {
//!     enum Vitals {
//!         Alive,
//!         Injured,
//!         Dead,
//!     }
//! }
//!
//! struct Enemy {
//!     health: Rc<Cell<i32>>,
//!     vitals: StateMachine<Vitals>,
//! }
//!
//! impl Enemy {
//!     fn new() -> Self {
//!         let health = Rc::new(Cell::new(100));
//!         let mut vitals = StateMachine::new(Vitals::Alive);
//!
//!         let h = Rc::clone(&health);
//!         vitals.add_transition_rule(Vitals::Alive, Vitals::Injured, move || h.get() < 50);
//!         let h = Rc::clone(&health);
//!         vitals.add_transition_rule(Vitals::Injured, Vitals::Dead, move || h.get() <= 0);
//!
//!         Self { health, vitals }
//!     }
//! }
//!
//! let mut enemies = ObjectPool::with_capacity(16);
//! let grunt = enemies.create_with(Enemy::new);
//!
//! if let Some(enemy) = enemies.get_mut(grunt) {
//!     enemy.health.set(30);
//!     enemy.vitals.step();
//!     assert_eq!(*enemy.vitals.current_state(), Vitals::Injured);
//! }
//!
//! enemies.destroy(grunt);
//! assert!(enemies.get(grunt).is_none());
//! ```

pub mod builder;
pub mod core;
pub mod events;
pub mod machine;
pub mod pool;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use self::core::{Guard, State, StateHistory, StateTransition};
pub use events::{Dispatcher, EventDispatcher};
pub use machine::{StateMachine, Transition};
pub use pool::{Handle, ObjectPool, PoolConfig, PoolError};
