//! Handles into an object pool.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weak reference to a pool slot plus the generation it was issued for.
///
/// A handle does not own anything and never keeps a value alive. The pool
/// accepts it only while the slot is live and still at the same generation,
/// so a handle to a destroyed value stays invalid even after the slot is
/// reused.
///
/// # Example
///
/// ```rust
/// use autonex::pool::ObjectPool;
///
/// let mut pool = ObjectPool::new();
/// let first = pool.create("first");
/// pool.destroy(first);
/// let second = pool.create("second");
///
/// assert_eq!(first.index(), second.index());
/// assert_ne!(first.generation(), second.generation());
/// assert!(!pool.validate(first));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle {
    index: u32,
    generation: u64,
}

impl Handle {
    pub(crate) fn new(index: u32, generation: u64) -> Self {
        Self { index, generation }
    }

    /// Position of the slot in the pool. Stable for the life of the pool.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    pub fn generation(self) -> u64 {
        self.generation
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
