//! Provider Module
//!
//! The upstream exchange rate source the cache sits in front of.

mod graphql;
mod swop;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::currency::CurrencyCode;
use crate::error::Result;
use crate::models::RateQuote;

pub use swop::{SwopClient, SwopClientConfig};

/// Remote rate lookups. Every call may hit a rate-limited API.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Current rate for `base -> quote`. Missing data is an error.
    async fn latest_rate(&self, base: CurrencyCode, quote: CurrencyCode) -> Result<Decimal>;

    /// Rate published for `date`, or `None` when the upstream has none (weekends, holidays).
    async fn historical_rate(
        &self,
        base: CurrencyCode,
        quote: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateQuote>>;

    /// True when the upstream currently answers with a usable rate.
    async fn health_check(&self) -> bool;
}
