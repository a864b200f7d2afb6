//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an absolute expiry.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// When the value was stored
    pub created_at: DateTime<Utc>,
    /// When the value stops being served
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry stored at `now` that expires at `expires_at`.
    pub fn new(value: T, now: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so a
    /// value cached "until midnight" is no longer served at 00:00:00.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, zero once expired.
    pub fn ttl_remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
