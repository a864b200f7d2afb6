//! Cache Key Module
//!
//! Composite keys for rate lookups, rendered to the opaque strings the store uses.

use std::fmt;

use chrono::NaiveDate;

use crate::currency::CurrencyCode;

/// Which upstream call a cached value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateKind {
    Latest,
    Historical,
}

impl RateKind {
    fn prefix(&self) -> &'static str {
        match self {
            RateKind::Latest => "latest",
            RateKind::Historical => "hist",
        }
    }
}

// == Cache Key ==
/// (kind, base, quote, date) lookup key.
///
/// Renders as `latest:EUR:GBP:2025-10-19` or `hist:EUR:GBP:2025-10-18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: RateKind,
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
    pub date: NaiveDate,
}

impl CacheKey {
    pub fn latest(base: CurrencyCode, quote: CurrencyCode, today: NaiveDate) -> Self {
        Self {
            kind: RateKind::Latest,
            base,
            quote,
            date: today,
        }
    }

    pub fn historical(base: CurrencyCode, quote: CurrencyCode, date: NaiveDate) -> Self {
        Self {
            kind: RateKind::Historical,
            base,
            quote,
            date,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.kind.prefix(),
            self.base,
            self.quote,
            self.date.format("%Y-%m-%d")
        )
    }
}
