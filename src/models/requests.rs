//! Request DTOs for the rate API
//!
//! Defines the structure of incoming HTTP request bodies.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::currency::{ensure_supported, CurrencyCode};
use crate::error::{RateError, Result};
use crate::models::HistoricalInterval;

/// A base/quote pair as sent by the widget.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRequest {
    #[serde(alias = "BaseCurrency")]
    pub base_currency: String,
    #[serde(alias = "QuoteCurrency")]
    pub quote_currency: String,
}

impl PairRequest {
    /// Checks both codes against the currency catalog.
    pub fn validate(&self) -> Result<(CurrencyCode, CurrencyCode)> {
        let base = ensure_supported(&self.base_currency)?;
        let quote = ensure_supported(&self.quote_currency)?;
        Ok((base, quote))
    }
}

/// Request body for POST /api/swop/convert
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    #[serde(alias = "BaseCurrency")]
    pub base_currency: String,
    #[serde(alias = "QuoteCurrency")]
    pub quote_currency: String,
    #[serde(alias = "Amount")]
    pub amount: Decimal,
}

impl ConvertRequest {
    pub fn validate(&self) -> Result<(CurrencyCode, CurrencyCode, Decimal)> {
        if self.amount < Decimal::ZERO {
            return Err(RateError::InvalidRequest(
                "Amount must be >= 0".to_string(),
            ));
        }
        let base = ensure_supported(&self.base_currency)?;
        let quote = ensure_supported(&self.quote_currency)?;
        Ok((base, quote, self.amount))
    }
}

/// Request body for POST /api/swop/historical
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRequest {
    #[serde(alias = "BaseCurrency")]
    pub base_currency: String,
    #[serde(alias = "QuoteCurrency")]
    pub quote_currency: String,
    #[serde(default, alias = "Interval")]
    pub interval: Option<String>,
}

impl HistoricalRequest {
    pub fn validate(&self) -> Result<(CurrencyCode, CurrencyCode, HistoricalInterval)> {
        let base = ensure_supported(&self.base_currency)?;
        let quote = ensure_supported(&self.quote_currency)?;
        Ok((base, quote, HistoricalInterval::parse(self.interval.as_deref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_request_deserialize() {
        let json = r#"{"baseCurrency": "eur", "quoteCurrency": "CZK", "amount": 12.5}"#;
        let req: ConvertRequest = serde_json::from_str(json).unwrap();

        let (base, quote, amount) = req.validate().unwrap();
        assert_eq!(base.as_str(), "EUR");
        assert_eq!(quote.as_str(), "CZK");
        assert_eq!(amount, dec!(12.5));
    }

    #[test]
    fn test_convert_rejects_negative_amount() {
        let req = ConvertRequest {
            base_currency: "EUR".to_string(),
            quote_currency: "USD".to_string(),
            amount: dec!(-1),
        };
        assert!(matches!(req.validate(), Err(RateError::InvalidRequest(_))));
    }

    #[test]
    fn test_historical_interval_optional() {
        let json = r#"{"baseCurrency": "EUR", "quoteCurrency": "USD"}"#;
        let req: HistoricalRequest = serde_json::from_str(json).unwrap();
        let (_, _, interval) = req.validate().unwrap();
        assert_eq!(interval, HistoricalInterval::Week);
    }

    #[test]
    fn test_pascal_case_keys_accepted() {
        let json = r#"{"BaseCurrency": "EUR", "QuoteCurrency": "PLN"}"#;
        let req: PairRequest = serde_json::from_str(json).unwrap();
        let (base, quote) = req.validate().unwrap();
        assert_eq!(base.as_str(), "EUR");
        assert_eq!(quote.as_str(), "PLN");

        let json = r#"{"BaseCurrency": "EUR", "QuoteCurrency": "USD", "Amount": 3}"#;
        let req: ConvertRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.amount, dec!(3));

        let json = r#"{"BaseCurrency": "EUR", "QuoteCurrency": "USD", "Interval": "month"}"#;
        let req: HistoricalRequest = serde_json::from_str(json).unwrap();
        let (_, _, interval) = req.validate().unwrap();
        assert_eq!(interval, HistoricalInterval::Month);
    }

    #[test]
    fn test_pair_rejects_unsupported_currency() {
        let req = PairRequest {
            base_currency: "EUR".to_string(),
            quote_currency: "JPY".to_string(),
        };
        assert!(matches!(req.validate(), Err(RateError::InvalidCurrency(_))));
    }
}
