//! Rate Cache Service
//!
//! Day-bucketed memoization in front of the upstream rate provider.

use std::sync::Arc;

use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::debug;

use super::widget::{percent_diff, volatility};
use crate::cache::{historical_expiry, latest_expiry, CacheKey, CacheStats, CacheStore};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::currency::CurrencyCode;
use crate::error::{RateError, Result};
use crate::models::{Conversion, HistoricalInterval, RateQuote, WidgetQuote};
use crate::provider::RateProvider;

/// Days before today the widget looks back at.
const WIDGET_LOOKBACK_DAYS: u64 = 3;

/// Value held by the rate cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedRate {
    Latest(Decimal),
    /// `None` records that the upstream had nothing for that date
    Historical(Option<RateQuote>),
}

// == Rate Cache Service ==
/// Shared rate cache. Cloning is cheap; all clones see the same store.
#[derive(Clone)]
pub struct RateCacheService {
    store: Arc<RwLock<CacheStore<CachedRate>>>,
    provider: Arc<dyn RateProvider>,
    clock: Arc<dyn Clock>,
    historical_ttl: Duration,
}

impl RateCacheService {
    pub fn new(
        provider: Arc<dyn RateProvider>,
        clock: Arc<dyn Clock>,
        max_entries: usize,
        historical_ttl: Duration,
    ) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(max_entries))),
            provider,
            clock,
            historical_ttl,
        }
    }

    /// Creates a service on the wall clock with parameters from the Config.
    pub fn from_config(config: &Config, provider: Arc<dyn RateProvider>) -> Self {
        Self::new(
            provider,
            Arc::new(SystemClock),
            config.max_entries,
            Duration::days(config.historical_ttl_days),
        )
    }

    // == Latest ==
    /// Today's rate for `base -> quote`, fetched at most once per UTC day.
    ///
    /// Upstream errors are returned as-is and nothing is cached for them.
    pub async fn get_or_fetch_latest(
        &self,
        base: CurrencyCode,
        quote: CurrencyCode,
    ) -> Result<Decimal> {
        let now = self.clock.now();
        let key = CacheKey::latest(base, quote, now.date_naive()).to_string();

        if let Some(CachedRate::Latest(rate)) = self.lookup(&key, now).await {
            return Ok(rate);
        }

        debug!("Cache miss for {}", key);
        let fetched = self.provider.latest_rate(base, quote).await;

        let mut store = self.store.write().await;
        store.record_fetch();
        let rate = fetched?;
        store.insert(key, CachedRate::Latest(rate), latest_expiry(now), now);
        Ok(rate)
    }

    // == Historical ==
    /// The rate published for `date`, or `None` if the upstream has none.
    ///
    /// Absence is cached like a value. Past dates are kept for the historical TTL,
    /// today and later only until the next UTC midnight.
    pub async fn get_or_fetch_historical(
        &self,
        base: CurrencyCode,
        quote: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateQuote>> {
        let now = self.clock.now();
        let key = CacheKey::historical(base, quote, date).to_string();

        if let Some(CachedRate::Historical(point)) = self.lookup(&key, now).await {
            return Ok(point);
        }

        debug!("Cache miss for {}", key);
        let fetched = self.provider.historical_rate(base, quote, date).await;

        let mut store = self.store.write().await;
        store.record_fetch();
        let point = fetched?;
        if point.is_none() {
            debug!("No upstream data for {}, caching absence", key);
        }
        store.insert(
            key,
            CachedRate::Historical(point.clone()),
            historical_expiry(date, now, self.historical_ttl),
            now,
        );
        Ok(point)
    }

    async fn lookup(&self, key: &str, now: DateTime<Utc>) -> Option<CachedRate> {
        let mut store = self.store.write().await;
        store.get(key, now)
    }

    // == Convert ==
    /// Converts `amount` of `base` into `quote` at today's rate.
    pub async fn convert(
        &self,
        base: CurrencyCode,
        quote: CurrencyCode,
        amount: Decimal,
    ) -> Result<Conversion> {
        if amount < Decimal::ZERO {
            return Err(RateError::InvalidRequest("Amount must be >= 0".to_string()));
        }

        let rate = self.get_or_fetch_latest(base, quote).await?;
        let converted = amount
            .checked_mul(rate)
            .ok_or_else(|| RateError::InvalidRequest("Amount is too large".to_string()))?;

        Ok(Conversion { rate, converted })
    }

    // == Historical Series ==
    /// Every available day from `today - interval` to today, oldest first.
    pub async fn historical_series(
        &self,
        base: CurrencyCode,
        quote: CurrencyCode,
        interval: HistoricalInterval,
    ) -> Result<Vec<RateQuote>> {
        let today = self.clock.now().date_naive();
        let start = today
            .checked_sub_days(Days::new(interval.days()))
            .ok_or_else(|| RateError::Internal("Date out of range".to_string()))?;

        let mut series = Vec::new();
        for date in start.iter_days().take_while(|d| *d <= today) {
            if let Some(point) = self.get_or_fetch_historical(base, quote, date).await? {
                series.push(point);
            }
        }
        Ok(series)
    }

    // == Widget ==
    /// Current rate plus its change against the last few days.
    pub async fn widget_quote(&self, base: CurrencyCode, quote: CurrencyCode) -> Result<WidgetQuote> {
        let current_rate = self.get_or_fetch_latest(base, quote).await?;
        let today = self.clock.now().date_naive();

        // Most recent day first.
        let mut recent = Vec::new();
        for offset in 1..=WIDGET_LOOKBACK_DAYS {
            let Some(date) = today.checked_sub_days(Days::new(offset)) else {
                break;
            };
            if let Some(point) = self.get_or_fetch_historical(base, quote, date).await? {
                recent.push(point);
            }
        }

        let percent_diffs: Vec<Decimal> = recent
            .iter()
            .filter_map(|p| percent_diff(current_rate, p.rate))
            .collect();
        let spread = volatility(&percent_diffs).ok_or_else(|| {
            RateError::Upstream(format!(
                "Rate history for {}/{} is out of range for volatility",
                base, quote
            ))
        })?;

        recent.reverse();
        Ok(WidgetQuote {
            base,
            quote,
            current_rate,
            last_days: recent,
            percent_diffs,
            volatility: spread,
        })
    }

    // == Maintenance ==
    /// Drops expired entries, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        self.store.write().await.cleanup_expired(now)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Probes the upstream directly, bypassing the cache.
    pub async fn upstream_healthy(&self) -> bool {
        self.provider.health_check().await
    }
}
