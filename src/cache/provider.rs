//! Cache Provider Module
//!
//! The storage capability a [`Cache`](crate::cache::Cache) routes to. Any
//! backend implementing this trait can be installed with
//! [`Cache::configure`](crate::cache::Cache::configure).

use chrono::{DateTime, Utc};

use crate::cache::CachedValue;

// == Cache Provider Trait ==
/// A pluggable key-value store of expiring payloads.
///
/// Methods take `&self`; implementations guard their own state.
pub trait CacheProvider: Send + Sync {
    /// Inserts or overwrites the entry for `key`.
    fn set(&self, key: &str, value: CachedValue, expires_at: DateTime<Utc>);

    /// Returns the payload for `key` if present and live.
    ///
    /// May purge expired entries as a side effect.
    fn get(&self, key: &str) -> Option<CachedValue>;

    /// Removes every entry, live or expired.
    fn clear(&self);

    /// Removes expired entries and returns how many were removed.
    ///
    /// Backends that expire entries on their own can keep the default.
    fn purge_expired(&self) -> usize {
        0
    }

    /// Number of stored entries, including expired ones not yet purged.
    fn len(&self) -> usize;

    /// Returns true if the provider holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
