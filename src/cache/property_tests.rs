//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache's lookup, typing, expiry, and
//! provider-swap behavior over generated keys and values.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::{Cache, CacheDuration, CacheProvider, Clock, ManualClock, MemoryCacheProvider};

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

/// Generates string values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}".prop_map(|s| s)
}

/// Generates durations that expire in the future
fn live_duration_strategy() -> impl Strategy<Value = CacheDuration> {
    prop_oneof![
        Just(CacheDuration::ExtraShort),
        Just(CacheDuration::Short),
        Just(CacheDuration::Medium),
        Just(CacheDuration::Long),
        (1i64..=10_000).prop_map(CacheDuration::Minutes),
    ]
}

fn cache_with_clock() -> (Cache, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_now());
    (Cache::with_clock(clock.clone()), clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A key that was never inserted reads back as None.
    #[test]
    fn prop_miss_before_insert(
        inserted in prop::collection::vec((key_strategy(), value_strategy()), 0..20),
        missing in key_strategy()
    ) {
        let (cache, _clock) = cache_with_clock();
        prop_assume!(!inserted.iter().any(|(k, _)| *k == missing));

        for (key, value) in &inserted {
            cache.cache(key, Some(value.clone()));
        }

        prop_assert!(cache.value::<String>(&missing).is_none());
    }

    // Storing with a live duration and reading back returns the same value.
    #[test]
    fn prop_roundtrip_storage(
        key in key_strategy(),
        value in value_strategy(),
        duration in live_duration_strategy()
    ) {
        let (cache, _clock) = cache_with_clock();

        cache.cache_for(&key, Some(value.clone()), duration);

        prop_assert_eq!(cache.value::<String>(&key), Some(value));
    }

    // Structured values survive the payload encoding.
    #[test]
    fn prop_roundtrip_numbers(
        key in key_strategy(),
        values in prop::collection::vec(any::<i64>(), 0..32)
    ) {
        let (cache, _clock) = cache_with_clock();

        cache.cache(&key, Some(values.clone()));

        prop_assert_eq!(cache.value::<Vec<i64>>(&key), Some(values));
    }

    // Any f64, including NaN and the infinities, reads back bit for bit.
    #[test]
    fn prop_roundtrip_any_float(
        key in key_strategy(),
        value in prop::num::f64::ANY,
        values in prop::collection::vec(prop::num::f64::ANY, 0..16)
    ) {
        let (cache, _clock) = cache_with_clock();

        cache.cache(&key, Some(value));
        let vec_key = format!("{}:vec", key);
        cache.cache(&vec_key, Some(values.clone()));

        let read = cache.value::<f64>(&key);
        prop_assert_eq!(read.map(f64::to_bits), Some(value.to_bits()));
        prop_assert!(cache.value::<Option<f64>>(&key).is_none());

        let read_vec = cache.value::<Vec<f64>>(&vec_key);
        prop_assert_eq!(
            read_vec.map(|v| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>()),
            Some(values.iter().map(|f| f.to_bits()).collect::<Vec<_>>())
        );
    }

    // An integer only reads back as its own width and sign.
    #[test]
    fn prop_integer_reads_need_exact_type(key in key_strategy(), value in any::<i32>()) {
        let (cache, _clock) = cache_with_clock();

        cache.cache(&key, Some(value));

        prop_assert_eq!(cache.value::<i32>(&key), Some(value));
        prop_assert!(cache.value::<i64>(&key).is_none());
        prop_assert!(cache.value::<u32>(&key).is_none());
        prop_assert!(cache.value::<u8>(&key).is_none());
        prop_assert!(cache.value::<f64>(&key).is_none());
        prop_assert!(cache.value::<serde_json::Value>(&key).is_none());
    }

    // A string value is never readable as a bool.
    #[test]
    fn prop_type_mismatch(key in key_strategy(), value in value_strategy()) {
        let (cache, _clock) = cache_with_clock();

        cache.cache(&key, Some(value));

        prop_assert!(cache.value::<String>(&key).is_some());
        prop_assert!(cache.value::<bool>(&key).is_none());
    }

    // After clear, no previously inserted key is readable.
    #[test]
    fn prop_clear_wipes_all(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..50)
    ) {
        let (cache, _clock) = cache_with_clock();

        for (key, value) in &entries {
            cache.cache(key, Some(value.clone()));
        }
        cache.clear();

        for (key, _) in &entries {
            prop_assert!(cache.value::<String>(key).is_none());
        }
        prop_assert!(cache.is_empty());
    }

    // An explicit instant in the past is never observable.
    #[test]
    fn prop_past_expiration_never_observable(
        key in key_strategy(),
        value in value_strategy(),
        minutes_ago in 0i64..=10_000
    ) {
        let (cache, clock) = cache_with_clock();
        let expiration = clock.now() - chrono::Duration::minutes(minutes_ago);

        cache.cache_until(&key, Some(value), expiration);

        prop_assert!(cache.value::<String>(&key).is_none());
        prop_assert!(cache.is_empty(), "Lookup should have purged the entry");
    }

    // Entries become absent once the clock passes their duration.
    #[test]
    fn prop_expires_after_duration(
        key in key_strategy(),
        value in value_strategy(),
        duration in live_duration_strategy()
    ) {
        let (cache, clock) = cache_with_clock();

        cache.cache_for(&key, Some(value.clone()), duration);

        clock.advance_minutes(duration.minutes() - 1);
        prop_assert_eq!(cache.value::<String>(&key), Some(value));

        clock.advance_minutes(1);
        prop_assert!(cache.value::<String>(&key).is_none());
    }

    // The last write for a key wins.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let (cache, _clock) = cache_with_clock();

        cache.cache(&key, Some(value1));
        cache.cache(&key, Some(value2.clone()));

        prop_assert_eq!(cache.value::<String>(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1, "Should have exactly one entry after overwrite");
    }

    // Entry count matches the number of distinct keys inserted.
    #[test]
    fn prop_distinct_keys_counted_once(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..100)
    ) {
        let (cache, _clock) = cache_with_clock();

        for (key, value) in &entries {
            cache.cache(key, Some(value.clone()));
        }

        let distinct: HashSet<&String> = entries.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(cache.len(), distinct.len());
    }

    // Swapping providers hides earlier entries and empties the old provider.
    #[test]
    fn prop_provider_swap_clears_old(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..20)
    ) {
        let clock = Arc::new(ManualClock::starting_now());
        let original = Arc::new(MemoryCacheProvider::with_clock(clock.clone()));
        let cache = Cache::with_provider(original.clone(), clock.clone());

        for (key, value) in &entries {
            cache.cache(key, Some(value.clone()));
        }

        cache.configure(MemoryCacheProvider::with_clock(clock.clone()));

        prop_assert!(original.is_empty());
        for (key, _) in &entries {
            prop_assert!(cache.value::<String>(key).is_none());
        }
    }
}
