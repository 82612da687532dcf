//! Errors reported by the object pool.

use thiserror::Error;

/// Errors that can occur when configuring a pool or claiming a slot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("Pool is full: all {max_slots} slots are in use")]
    Full { max_slots: u32 },

    #[error("Pool slot index space exhausted")]
    IndexSpaceExhausted,

    #[error("Invalid pool configuration: {reason}")]
    InvalidConfig { reason: String },
}
