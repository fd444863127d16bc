//! Cache Duration Module
//!
//! Named and custom lifetimes for cached values, expressed in minutes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// == Cache Duration ==
/// How long a value stays in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheDuration {
    /// 1 minute
    ExtraShort,
    /// 10 minutes
    Short,
    /// 30 minutes
    #[default]
    Medium,
    /// 60 minutes
    Long,
    /// A custom number of minutes. Negative values produce entries that are
    /// already expired.
    Minutes(i64),
}

impl CacheDuration {
    /// The duration in minutes.
    pub fn minutes(&self) -> i64 {
        match self {
            CacheDuration::ExtraShort => 1,
            CacheDuration::Short => 10,
            CacheDuration::Medium => 30,
            CacheDuration::Long => 60,
            CacheDuration::Minutes(minutes) => *minutes,
        }
    }

    /// Resolves a minute count to the matching preset, or `Minutes(n)`.
    pub fn from_minutes(minutes: i64) -> Self {
        match minutes {
            1 => CacheDuration::ExtraShort,
            10 => CacheDuration::Short,
            30 => CacheDuration::Medium,
            60 => CacheDuration::Long,
            other => CacheDuration::Minutes(other),
        }
    }

    // == Expires At ==
    /// Absolute expiration instant for a value cached at `now`.
    ///
    /// Saturates at the representable bounds instead of overflowing.
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let minutes = self.minutes();
        let saturated = if minutes < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };

        Duration::try_minutes(minutes)
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(saturated)
    }
}
