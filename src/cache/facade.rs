//! Cache Facade Module
//!
//! The public entry point: routes every call to the active provider and
//! turns durations into expiration instants.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info};

use crate::cache::{
    CacheDuration, CacheProvider, CachedValue, Clock, MemoryCacheProvider, SystemClock,
};
use crate::config::CacheConfig;

// == Cache ==
/// A small in-memory cache for serializable values.
///
/// Holds exactly one active [`CacheProvider`], a [`MemoryCacheProvider`]
/// unless replaced with [`Cache::configure`]. No operation fails: absent
/// values are ignored and misses, expired entries, and type mismatches all
/// read back as `None`. A value reads back only as the exact type it was
/// cached as (`&str` is cached as `String`).
///
/// ```
/// use tiny_cache::{Cache, CacheDuration};
///
/// let cache = Cache::new();
/// cache.cache_for("greeting", Some("hello"), CacheDuration::Short);
///
/// assert_eq!(cache.value::<String>("greeting").as_deref(), Some("hello"));
/// assert_eq!(cache.value::<bool>("greeting"), None);
/// ```
pub struct Cache {
    /// Active provider; every provider call holds the read guard so a swap
    /// cannot interleave with it
    provider: RwLock<Arc<dyn CacheProvider>>,
    /// Time source for duration conversion
    clock: Arc<dyn Clock>,
    /// Duration used by [`Cache::cache`]
    default_duration: CacheDuration,
}

impl Cache {
    // == Constructors ==
    /// Creates a cache backed by a [`MemoryCacheProvider`] and the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a memory-backed cache sharing `clock` with its provider.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let provider = Arc::new(MemoryCacheProvider::with_clock(clock.clone()));
        Self::with_provider(provider, clock)
    }

    /// Creates a cache starting from an explicit provider.
    pub fn with_provider(provider: Arc<dyn CacheProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            provider: RwLock::new(provider),
            clock,
            default_duration: CacheDuration::default(),
        }
    }

    /// Creates a memory-backed cache from configuration.
    ///
    /// Only the default duration is applied here; start the background
    /// sweep with [`spawn_configured_sweep`](crate::tasks::spawn_configured_sweep).
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new().with_default_duration(config.default_duration)
    }

    /// Sets the duration used by [`Cache::cache`].
    pub fn with_default_duration(mut self, duration: CacheDuration) -> Self {
        self.default_duration = duration;
        self
    }

    /// The duration used by [`Cache::cache`].
    pub fn default_duration(&self) -> CacheDuration {
        self.default_duration
    }

    // == Configure ==
    /// Replaces the active provider.
    ///
    /// The outgoing provider is cleared before the new one is installed.
    pub fn configure<P: CacheProvider + 'static>(&self, provider: P) {
        self.configure_shared(Arc::new(provider));
    }

    /// Replaces the active provider with a shared one.
    pub fn configure_shared(&self, provider: Arc<dyn CacheProvider>) {
        let mut active = self.provider.write();
        active.clear();
        *active = provider;
        info!("Cache provider replaced; previous provider cleared");
    }

    // == Cache ==
    /// Caches `value` under `key` for the default duration.
    ///
    /// `None` is a no-op.
    pub fn cache<T>(&self, key: &str, value: Option<T>)
    where
        T: Serialize + Send + Sync + 'static,
    {
        self.cache_for(key, value, self.default_duration);
    }

    /// Caches `value` under `key` for `duration`, measured from now.
    ///
    /// `None` is a no-op.
    pub fn cache_for<T>(&self, key: &str, value: Option<T>, duration: CacheDuration)
    where
        T: Serialize + Send + Sync + 'static,
    {
        let Some(value) = value else {
            return;
        };
        let expires_at = duration.expires_at(self.clock.now());
        self.provider
            .read()
            .set(key, CachedValue::new(value), expires_at);
    }

    /// Caches `value` under `key` until `expiration`.
    ///
    /// `None` is a no-op. An instant already in the past stores nothing
    /// observable.
    pub fn cache_until<T>(&self, key: &str, value: Option<T>, expiration: DateTime<Utc>)
    where
        T: Serialize + Send + Sync + 'static,
    {
        let Some(value) = value else {
            return;
        };
        self.provider
            .read()
            .set(key, CachedValue::new(value), expiration);
    }

    // == Value ==
    /// Returns the value cached under `key` as a `T`.
    ///
    /// `None` if the key is missing, expired, or was cached as a type other
    /// than `T`.
    pub fn value<T: Clone + 'static>(&self, key: &str) -> Option<T> {
        let payload = self.provider.read().get(key)?;
        match payload.downcast::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Cached key {} does not match requested type: {}", key, e);
                None
            }
        }
    }

    // == Clear ==
    /// Removes every cached value, ignoring expiration.
    pub fn clear(&self) {
        self.provider.read().clear();
    }

    // == Maintenance ==
    /// Removes expired entries from the active provider.
    pub fn purge_expired(&self) -> usize {
        self.provider.read().purge_expired()
    }

    /// Number of entries held by the active provider, as reported by its
    /// [`CacheProvider::len`].
    pub fn len(&self) -> usize {
        self.provider.read().len()
    }

    /// Returns true if the active provider holds no entries.
    pub fn is_empty(&self) -> bool {
        self.provider.read().is_empty()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("entries", &self.len())
            .field("default_duration", &self.default_duration)
            .finish()
    }
}
