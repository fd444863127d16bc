//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with expiration.

use chrono::{DateTime, Duration, Utc};

use crate::cache::CachedValue;

// == Cache Entry ==
/// Represents a single cache entry: a payload and the instant it expires.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: CachedValue,
    /// Instant after which the entry is considered absent
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `value` - The payload to store
    /// * `expires_at` - Absolute expiration instant
    pub fn new(value: CachedValue, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    // == Is Live ==
    /// Checks if the entry can still be returned at `now`.
    ///
    /// Boundary condition: an entry expiring at exactly `now` is not live.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.is_live(now)
    }

    // == Time Remaining ==
    /// Returns the remaining lifetime at `now`.
    ///
    /// # Returns
    /// - `Duration::zero()` if the entry has expired
    /// - the time left until `expires_at` otherwise
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.is_live(now) {
            self.expires_at.signed_duration_since(now)
        } else {
            Duration::zero()
        }
    }
}
