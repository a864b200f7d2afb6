//! Rate models
//!
//! Values produced by the rate cache and returned by the API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::CurrencyCode;

/// One published rate for a (base, quote, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
    pub date: NaiveDate,
    pub rate: Decimal,
}

/// How far back a historical series reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoricalInterval {
    #[default]
    Week,
    Month,
}

impl HistoricalInterval {
    /// "month" (any case) selects a month, anything else a week.
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            Some(s) if s.trim().eq_ignore_ascii_case("month") => HistoricalInterval::Month,
            _ => HistoricalInterval::Week,
        }
    }

    /// Days before today covered by the series.
    pub fn days(&self) -> u64 {
        match self {
            HistoricalInterval::Week => 7,
            HistoricalInterval::Month => 30,
        }
    }
}

/// Result of converting an amount at the latest rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub rate: Decimal,
    pub converted: Decimal,
}

/// Data behind the currency widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetQuote {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
    pub current_rate: Decimal,
    /// Up to three previous days, oldest first
    pub last_days: Vec<RateQuote>,
    /// Percent change from each previous day to now, most recent day first
    pub percent_diffs: Vec<Decimal>,
    /// Population standard deviation of `percent_diffs`
    pub volatility: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_interval_parse() {
        assert_eq!(HistoricalInterval::parse(Some("Month")), HistoricalInterval::Month);
        assert_eq!(HistoricalInterval::parse(Some("week")), HistoricalInterval::Week);
        assert_eq!(HistoricalInterval::parse(Some("year")), HistoricalInterval::Week);
        assert_eq!(HistoricalInterval::parse(None), HistoricalInterval::Week);
        assert_eq!(HistoricalInterval::Month.days(), 30);
    }

    #[test]
    fn test_rate_quote_serialize() {
        let quote = RateQuote {
            base: CurrencyCode::parse("EUR").unwrap(),
            quote: CurrencyCode::parse("USD").unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
            rate: dec!(1.25),
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["base"], "EUR");
        assert_eq!(json["date"], "2025-10-18");
        assert_eq!(json["rate"].as_f64(), Some(1.25));
    }
}
