//! Guard predicates for controlling state transitions.
//!
//! Guards are zero-argument boolean functions that decide whether a transition
//! fires. They usually read simulation data the owner shares with them (for
//! example through `Rc<Cell<_>>`).

use std::fmt;

/// Predicate that determines if a transition can execute.
///
/// Guards are evaluated in registration order every time the machine steps.
/// They must not mutate the machine they are registered on.
///
/// # Example
///
/// ```rust
/// use autonex::core::Guard;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let health = Rc::new(Cell::new(100));
/// let low_health = {
///     let health = Rc::clone(&health);
///     Guard::new(move || health.get() < 50)
/// };
///
/// assert!(!low_health.check());
/// health.set(30);
/// assert!(low_health.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool>,
}

impl Guard {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that always passes.
    ///
    /// ```rust
    /// use autonex::core::Guard;
    ///
    /// assert!(Guard::always().check());
    /// ```
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Evaluate the guard.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
