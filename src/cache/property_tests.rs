//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's ledger, capacity and expiry rules.

use chrono::{DateTime, Duration, NaiveDate, Timelike, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::cache::{historical_expiry, next_utc_midnight, CacheStore};
use crate::service::volatility;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 16;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 19, 0, 0, 0).unwrap()
}

// == Strategies ==
/// Keys drawn from a small pool so operations collide
fn key_strategy() -> impl Strategy<Value = String> {
    (0u8..24).prop_map(|i| format!("latest:EUR:USD:{}", i))
}

/// Instants spread over roughly ten years
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..315_360_000).prop_map(|secs| base_time() + Duration::seconds(secs))
}

#[derive(Debug, Clone)]
enum CacheOp {
    Insert { key: String, ttl_secs: i64 },
    Get { key: String },
    Advance { secs: i64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), 1i64..3_600).prop_map(|(key, ttl_secs)| CacheOp::Insert { key, ttl_secs }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        (0i64..1_800).prop_map(|secs| CacheOp::Advance { secs }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every get is exactly one hit or one miss, and the entry count matches the store.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let mut store: CacheStore<u32> = CacheStore::new(TEST_MAX_ENTRIES);
        let mut now = base_time();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Insert { key, ttl_secs } => {
                    store.insert(key, 1, now + Duration::seconds(ttl_secs), now);
                }
                CacheOp::Get { key } => match store.get(&key, now) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Advance { secs } => now += Duration::seconds(secs),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }

    // The store never holds more than its capacity.
    #[test]
    fn prop_capacity_enforcement(keys in prop::collection::vec(key_strategy(), 1..100)) {
        let mut store: CacheStore<u32> = CacheStore::new(TEST_MAX_ENTRIES);
        let now = base_time();

        for key in keys {
            store.insert(key, 0, now + Duration::hours(1), now);
            prop_assert!(store.len() <= TEST_MAX_ENTRIES);
        }
    }

    // A value is served strictly before its expiry and never at or after it.
    #[test]
    fn prop_expiry_is_absolute(ttl_secs in 1i64..86_400, at_secs in 0i64..172_800) {
        let mut store: CacheStore<u32> = CacheStore::new(TEST_MAX_ENTRIES);
        let now = base_time();
        store.insert("k".to_string(), 7, now + Duration::seconds(ttl_secs), now);

        let found = store.get("k", now + Duration::seconds(at_secs));
        prop_assert_eq!(found.is_some(), at_secs < ttl_secs);
    }

    // Next midnight is a midnight, after now, and at most a day away.
    #[test]
    fn prop_next_midnight_bounds(now in instant_strategy()) {
        let midnight = next_utc_midnight(now);

        prop_assert!(midnight > now);
        prop_assert!(midnight - now <= Duration::days(1));
        prop_assert_eq!(midnight.num_seconds_from_midnight(), 0);
        prop_assert_eq!(midnight.date_naive(), now.date_naive().succ_opt().unwrap());
    }

    // Past dates are never kept for less time than the current day's entries.
    #[test]
    fn prop_past_dates_outlive_today(
        now in instant_strategy(),
        days_back in 1u64..400,
        ttl_days in 1i64..30,
    ) {
        let date: NaiveDate = now.date_naive() - chrono::Days::new(days_back);
        let expiry = historical_expiry(date, now, Duration::days(ttl_days));

        prop_assert!(expiry >= next_utc_midnight(now));
    }

    // Volatility is never negative and is zero when every diff is equal.
    #[test]
    fn prop_volatility_non_negative(
        raw in prop::collection::vec(-100_000i64..100_000, 0..10),
        constant in -100_000i64..100_000,
        repeat in 2usize..6,
    ) {
        let diffs: Vec<Decimal> = raw.iter().map(|v| Decimal::new(*v, 3)).collect();
        prop_assert!(volatility(&diffs).is_some_and(|v| v >= Decimal::ZERO));

        let flat = vec![Decimal::new(constant, 3); repeat];
        prop_assert_eq!(volatility(&flat), Some(Decimal::ZERO));
    }
}
