//! Memory Provider Module
//!
//! In-process cache provider backed by a HashMap with lazy expiration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheProvider, CachedValue, Clock, SystemClock};

// == Memory Cache Provider ==
/// Stores entries in memory and purges expired ones on every lookup.
///
/// There is no background timer: each `get` sweeps the whole store before
/// looking up the key, so cost per read grows with the number of entries.
pub struct MemoryCacheProvider {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Time source for expiration checks
    clock: Arc<dyn Clock>,
}

impl MemoryCacheProvider {
    // == Constructor ==
    /// Creates an empty provider using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty provider using the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    // == Sweep ==
    /// Removes every entry expired at `now`. Returns the number removed.
    fn sweep(entries: &mut HashMap<String, CacheEntry>, now: DateTime<Utc>) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        before - entries.len()
    }
}

impl Default for MemoryCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryCacheProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCacheProvider")
            .field("entries", &self.entries.read().len())
            .finish()
    }
}

impl CacheProvider for MemoryCacheProvider {
    // == Set ==
    /// Stores the payload, replacing any existing entry and its expiration.
    fn set(&self, key: &str, value: CachedValue, expires_at: DateTime<Utc>) {
        let entry = CacheEntry::new(value, expires_at);
        self.entries.write().insert(key.to_string(), entry);
        trace!(key, %expires_at, "cache set");
    }

    // == Get ==
    /// Sweeps expired entries, then returns the payload for `key`.
    fn get(&self, key: &str) -> Option<CachedValue> {
        // One lock across sweep and lookup
        let mut entries = self.entries.write();
        let now = self.clock.now();

        let removed = Self::sweep(&mut entries, now);
        if removed > 0 {
            debug!("Cache sweep: removed {} expired entries", removed);
        }

        match entries.get(key) {
            Some(entry) if entry.is_live(now) => {
                trace!(key, "cache hit");
                Some(entry.value.clone())
            }
            _ => {
                trace!(key, "cache miss");
                None
            }
        }
    }

    // == Clear ==
    fn clear(&self) {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        trace!("cache cleared ({} entries)", count);
    }

    // == Purge Expired ==
    fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write();
        let now = self.clock.now();
        Self::sweep(&mut entries, now)
    }

    // == Length ==
    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
