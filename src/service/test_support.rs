//! In-memory provider for service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::currency::CurrencyCode;
use crate::error::{RateError, Result};
use crate::models::RateQuote;
use crate::provider::RateProvider;

pub fn code(s: &str) -> CurrencyCode {
    CurrencyCode::parse(s).unwrap()
}

/// Serves one latest rate for every pair and a fixed set of historical days.
pub struct StubProvider {
    latest: Mutex<Decimal>,
    historical: Mutex<HashMap<NaiveDate, Decimal>>,
    failing: AtomicBool,
    latest_calls: AtomicUsize,
    historical_calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(latest: Decimal) -> Self {
        Self {
            latest: Mutex::new(latest),
            historical: Mutex::new(HashMap::new()),
            failing: AtomicBool::new(false),
            latest_calls: AtomicUsize::new(0),
            historical_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_historical(self, date: NaiveDate, rate: Decimal) -> Self {
        self.add_historical(date, rate);
        self
    }

    pub fn add_historical(&self, date: NaiveDate, rate: Decimal) {
        self.historical.lock().unwrap().insert(date, rate);
    }

    pub fn set_latest(&self, rate: Decimal) {
        *self.latest.lock().unwrap() = rate;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn latest_calls(&self) -> usize {
        self.latest_calls.load(Ordering::SeqCst)
    }

    pub fn historical_calls(&self) -> usize {
        self.historical_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for StubProvider {
    async fn latest_rate(&self, _base: CurrencyCode, _quote: CurrencyCode) -> Result<Decimal> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RateError::Upstream("stub failure".to_string()));
        }
        Ok(*self.latest.lock().unwrap())
    }

    async fn historical_rate(
        &self,
        base: CurrencyCode,
        quote: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateQuote>> {
        self.historical_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RateError::Upstream("stub failure".to_string()));
        }
        let rate = self.historical.lock().unwrap().get(&date).copied();
        Ok(rate.map(|rate| RateQuote {
            base,
            quote,
            date,
            rate,
        }))
    }

    async fn health_check(&self) -> bool {
        !self.failing.load(Ordering::SeqCst)
    }
}
