//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::cache::CacheDuration;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Duration applied when a value is cached without one
    pub default_duration: CacheDuration,
    /// Background sweep interval in seconds, None = lazy sweeping only.
    /// Applied by `tasks::spawn_configured_sweep`.
    pub sweep_interval: Option<u64>,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TINY_CACHE_DEFAULT_MINUTES` - Default duration in minutes (default: 30)
    /// - `TINY_CACHE_SWEEP_INTERVAL` - Background sweep interval in seconds
    ///   (default: unset, 0 also disables it)
    pub fn from_env() -> Self {
        Self {
            default_duration: env::var("TINY_CACHE_DEFAULT_MINUTES")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .map(CacheDuration::from_minutes)
                .unwrap_or_default(),
            sweep_interval: env::var("TINY_CACHE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_duration: CacheDuration::Medium,
            sweep_interval: None,
        }
    }
}
