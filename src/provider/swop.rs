//! SWOP GraphQL client
//!
//! Talks to the rate-limited SWOP API. No caching and no retries happen here;
//! that is the rate cache's job.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::graphql::{
    find_quote, find_quote_on, GraphQlRequest, GraphQlResponse, HistoricalData,
    HistoricalVariables, LatestData, LatestVariables, HISTORICAL_QUERY, LATEST_QUERY,
};
use super::RateProvider;
use crate::config::Config;
use crate::currency::CurrencyCode;
use crate::error::{RateError, Result};
use crate::models::RateQuote;

/// Connection settings for [`SwopClient`].
#[derive(Debug, Clone)]
pub struct SwopClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl SwopClientConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .swop_api_key
            .clone()
            .ok_or_else(|| RateError::Config("SWOP_API_KEY is not set".to_string()))?;

        Ok(Self {
            api_url: config.swop_api_url.clone(),
            api_key,
            timeout: Duration::from_secs(config.upstream_timeout),
        })
    }
}

// == Swop Client ==
#[derive(Debug, Clone)]
pub struct SwopClient {
    client: Client,
    api_url: String,
}

impl SwopClient {
    /// Builds the HTTP client with the API key installed as a default header.
    pub fn new(config: SwopClientConfig) -> Result<Self> {
        if config.api_url.trim().is_empty() {
            return Err(RateError::Config("SWOP_API_URL is not set".to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("ApiKey {}", config.api_key))
            .map_err(|_| RateError::Config("SWOP_API_KEY contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| RateError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url,
        })
    }

    /// Sends one GraphQL query and decodes the envelope.
    async fn query<V, T>(&self, query: &str, variables: V) -> Result<GraphQlResponse<T>>
    where
        V: Serialize + Send,
        T: DeserializeOwned + Send,
    {
        let body = GraphQlRequest { query, variables };

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RateError::Timeout
                } else {
                    RateError::Upstream(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("SWOP rate limit reached");
            return Err(RateError::RateLimited);
        }
        if !status.is_success() {
            return Err(RateError::Upstream(format!("HTTP {}", status)));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| RateError::Upstream(e.to_string()))?;
        debug!("SWOP response ({} bytes): {}", raw.len(), raw);

        serde_json::from_str(&raw).map_err(|e| RateError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RateProvider for SwopClient {
    async fn latest_rate(&self, base: CurrencyCode, quote: CurrencyCode) -> Result<Decimal> {
        debug!("SWOP latest {} -> {}", base, quote);

        let response: GraphQlResponse<LatestData> = self
            .query(
                LATEST_QUERY,
                LatestVariables {
                    base_currency: base.as_str(),
                    quote_currencies: [quote.as_str()],
                },
            )
            .await?;

        let summary = response.error_summary();
        let data = response.data.ok_or_else(|| {
            RateError::Upstream(summary.unwrap_or_else(|| "SWOP returned no data".to_string()))
        })?;

        find_quote(data.latest.as_deref(), quote.as_str())
            .map(|item| item.quote)
            .ok_or_else(|| {
                RateError::Upstream(format!("SWOP returned no latest rate for {}", quote))
            })
    }

    async fn historical_rate(
        &self,
        base: CurrencyCode,
        quote: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateQuote>> {
        debug!("SWOP historical {} -> {} on {}", base, quote, date);

        let response: GraphQlResponse<HistoricalData> = self
            .query(
                HISTORICAL_QUERY,
                HistoricalVariables {
                    date: date.format("%Y-%m-%d").to_string(),
                    base_currency: base.as_str(),
                    quote_currencies: [quote.as_str()],
                },
            )
            .await?;

        if let Some(summary) = response.error_summary() {
            debug!("SWOP historical {} reported: {}", date, summary);
        }

        let Some(data) = response.data else {
            return Ok(None);
        };

        let point = find_quote_on(data.historical.as_deref(), quote.as_str(), date);
        if point.is_none() {
            debug!("SWOP has no {} rate published on {}", quote, date);
        }

        Ok(point.map(|item| RateQuote {
            base,
            quote,
            date,
            rate: item.quote,
        }))
    }

    async fn health_check(&self) -> bool {
        let (Ok(eur), Ok(usd)) = (CurrencyCode::parse("EUR"), CurrencyCode::parse("USD")) else {
            return false;
        };

        match self.latest_rate(eur, usd).await {
            Ok(rate) => rate > Decimal::ZERO,
            Err(e) => {
                warn!("SWOP health check failed: {}", e);
                false
            }
        }
    }
}
