//! Generational object pool.
//!
//! [`ObjectPool`] stores values in reusable slots and hands out [`Handle`]s
//! made of a slot index and a generation. A handle is checked against the
//! slot's current generation on every access, so stale handles are detected
//! in O(1) instead of reaching a value that replaced the one they pointed at.
//!
//! # Generation exhaustion
//!
//! Generations are `u64` and bump on every destroy and every reuse. A slot
//! whose counter would run out is retired: it stays dead and is never handed
//! out again, so no two handles can ever alias.

mod config;
mod error;
mod handle;
mod object_pool;

pub use config::PoolConfig;
pub use error::PoolError;
pub use handle::Handle;
pub use object_pool::ObjectPool;
