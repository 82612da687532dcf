//! Pool configuration.

use crate::pool::error::PoolError;
use serde::{Deserialize, Serialize};

/// Sizing options for an [`ObjectPool`](crate::pool::ObjectPool).
///
/// Every field has a default, so hosts can embed this in their own settings
/// files and only name what they change.
///
/// # Example
///
/// ```rust
/// use autonex::pool::{ObjectPool, PoolConfig};
///
/// let config = PoolConfig::default()
///     .with_initial_capacity(64)
///     .with_max_slots(1024);
///
/// let pool: ObjectPool<u32> = ObjectPool::with_config(&config).unwrap();
/// assert!(pool.capacity() >= 64);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Slots reserved up front.
    pub initial_capacity: usize,

    /// Upper bound on the number of slots the pool may ever allocate.
    /// `None` means the pool grows until the index space runs out.
    pub max_slots: Option<u32>,
}

impl PoolConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_slots(mut self, max_slots: u32) -> Self {
        self.max_slots = Some(max_slots);
        self
    }

    /// Reject limits that could never be satisfied.
    pub fn validate(&self) -> Result<(), PoolError> {
        let Some(max_slots) = self.max_slots else {
            return Ok(());
        };

        if max_slots == 0 {
            return Err(PoolError::InvalidConfig {
                reason: "max_slots must be greater than zero".to_string(),
            });
        }

        if self.initial_capacity > max_slots as usize {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "initial_capacity ({}) exceeds max_slots ({max_slots})",
                    self.initial_capacity
                ),
            });
        }

        Ok(())
    }
}
