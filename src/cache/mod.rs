//! Cache Module
//!
//! In-memory rate storage with absolute expiry and LRU eviction.

mod entry;
mod expiry;
mod key;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use expiry::{historical_expiry, latest_expiry, next_utc_midnight};
pub use key::{CacheKey, RateKind};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;
