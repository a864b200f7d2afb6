//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{RateError, Result};

/// Default SWOP GraphQL endpoint.
pub const DEFAULT_SWOP_API_URL: &str = "https://swop.cx/graphql";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// SWOP GraphQL endpoint
    pub swop_api_url: String,
    /// SWOP API key, sent as `Authorization: ApiKey <key>`
    pub swop_api_key: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of entries the rate cache can hold
    pub max_entries: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// How long a past date's historical rate stays cached, in days
    pub historical_ttl_days: i64,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SWOP_API_URL` - GraphQL endpoint (default: https://swop.cx/graphql)
    /// - `SWOP_API_KEY` - API key (no default, checked by [`Config::validate`])
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 10000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `HISTORICAL_TTL_DAYS` - TTL for past-date rates (default: 7)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            swop_api_url: env::var("SWOP_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.swop_api_url),
            swop_api_key: env::var("SWOP_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            historical_ttl_days: parse_var("HISTORICAL_TTL_DAYS")
                .unwrap_or(defaults.historical_ttl_days),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT").unwrap_or(defaults.upstream_timeout),
        }
    }

    /// Checks the values the service cannot start without.
    pub fn validate(&self) -> Result<()> {
        if self.swop_api_key.is_none() {
            return Err(RateError::Config("SWOP_API_KEY is not set".to_string()));
        }
        if self.max_entries == 0 {
            return Err(RateError::Config(
                "MAX_ENTRIES must be greater than zero".to_string(),
            ));
        }
        if self.historical_ttl_days < 1 {
            return Err(RateError::Config(
                "HISTORICAL_TTL_DAYS must be at least 1".to_string(),
            ));
        }
        if self.cleanup_interval == 0 {
            return Err(RateError::Config(
                "CLEANUP_INTERVAL must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swop_api_url: DEFAULT_SWOP_API_URL.to_string(),
            swop_api_key: None,
            server_port: 3000,
            max_entries: 10_000,
            cleanup_interval: 60,
            historical_ttl_days: 7,
            upstream_timeout: 30,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
