//! Cache Module
//!
//! Provides the cache facade, the pluggable provider trait, and the
//! in-memory provider with lazy expiration.

mod clock;
mod duration;
mod entry;
mod facade;
mod memory;
mod provider;
mod value;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use duration::CacheDuration;
pub use entry::CacheEntry;
pub use facade::Cache;
pub use memory::MemoryCacheProvider;
pub use provider::CacheProvider;
pub use value::CachedValue;
