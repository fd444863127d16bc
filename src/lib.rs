//! Tiny Cache - A small in-process cache for serializable values
//!
//! Stores values under string keys with minute-based expiration. Expired
//! entries are purged lazily on lookup; the storage backend is pluggable
//! through the [`CacheProvider`] trait.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{
    Cache, CacheDuration, CacheEntry, CacheProvider, CachedValue, Clock, ManualClock,
    MemoryCacheProvider, SystemClock,
};
pub use config::CacheConfig;
pub use error::CacheError;
pub use tasks::{spawn_configured_sweep, spawn_sweep_task};
