//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and absolute expiry.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Cache Store ==
/// In-memory store with LRU eviction and per-entry expiry.
///
/// The store never reads the clock itself; every time-dependent call is handed `now`.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker<String>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `max_entries` (at least one).
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
        }
    }

    // == Get ==
    /// Returns a live value for `key`.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove(key);
            self.stats.record_miss();
            return None;
        }

        let value = self.entries.get(key).map(|entry| entry.value.clone());
        self.stats.record_hit();
        self.lru.touch(&key.to_string());
        value
    }

    // == Insert ==
    /// Stores `value` under `key` until `expires_at`.
    ///
    /// An existing key is overwritten. A new key at capacity evicts the least
    /// recently used entry first.
    pub fn insert(&mut self, key: String, value: V, expires_at: DateTime<Utc>, now: DateTime<Utc>) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        self.entries
            .insert(key.clone(), CacheEntry::new(value, now, expires_at));
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Remove ==
    /// Removes an entry, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(&key.to_string());
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self, now: DateTime<Utc>) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    /// Counts one upstream call made to fill a miss.
    pub fn record_fetch(&mut self) {
        self.stats.record_fetch();
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
