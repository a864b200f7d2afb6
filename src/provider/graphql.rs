//! SWOP GraphQL wire types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const LATEST_QUERY: &str = r#"
query($baseCurrency: String!, $quoteCurrencies: [String!]!) {
    latest(baseCurrency: $baseCurrency, quoteCurrencies: $quoteCurrencies) {
        date
        baseCurrency
        quoteCurrency
        quote
    }
}"#;

pub const HISTORICAL_QUERY: &str = r#"
query($date: Date!, $baseCurrency: String!, $quoteCurrencies: [String!]!) {
    historical(date: $date, baseCurrency: $baseCurrency, quoteCurrencies: $quoteCurrencies) {
        date
        baseCurrency
        quoteCurrency
        quote
    }
}"#;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestVariables<'a> {
    pub base_currency: &'a str,
    pub quote_currencies: [&'a str; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalVariables<'a> {
    pub date: String,
    pub base_currency: &'a str,
    pub quote_currencies: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Joins the reported error messages.
    pub fn error_summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LatestData {
    #[serde(default)]
    pub latest: Option<Vec<RateItem>>,
}

#[derive(Debug, Deserialize)]
pub struct HistoricalData {
    #[serde(default)]
    pub historical: Option<Vec<RateItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateItem {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub quote_currency: String,
    pub quote: Decimal,
}

/// Finds the item quoting `quote` in a result list.
pub fn find_quote<'a>(items: Option<&'a [RateItem]>, quote: &str) -> Option<&'a RateItem> {
    items?.iter().find(|item| item.quote_currency == quote)
}

/// Like [`find_quote`], but only for an item published on `date`.
///
/// The upstream answers non-publishing days with the last business day's
/// quote; those items are skipped. Items without a date are taken as-is.
pub fn find_quote_on<'a>(
    items: Option<&'a [RateItem]>,
    quote: &str,
    date: NaiveDate,
) -> Option<&'a RateItem> {
    items?
        .iter()
        .find(|item| item.quote_currency == quote && item.date.map_or(true, |d| d == date))
}
