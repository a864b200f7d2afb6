//! API Handlers
//!
//! HTTP request handlers for the rate endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::config::Config;
use crate::currency::{catalog, CurrencyCode, CurrencyInfo, SupportedCurrency};
use crate::error::{RateError, Result};
use crate::models::{
    Conversion, ConvertRequest, HealthResponse, HistoricalRequest, PairRequest, RateQuote,
    StatsResponse, UpstreamHealthResponse, WidgetQuote,
};
use crate::provider::RateProvider;
use crate::service::RateCacheService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub rates: RateCacheService,
}

impl AppState {
    pub fn new(rates: RateCacheService) -> Self {
        Self { rates }
    }

    /// Creates a new AppState from configuration around the given provider.
    pub fn from_config(config: &Config, provider: Arc<dyn RateProvider>) -> Self {
        Self::new(RateCacheService::from_config(config, provider))
    }
}

/// Handler for GET /api/currencies
pub async fn currencies_handler() -> Json<Vec<CurrencyInfo>> {
    Json(catalog())
}

/// Handler for GET /api/currencies/:iso
pub async fn currency_handler(Path(iso): Path<String>) -> Result<Json<CurrencyInfo>> {
    let code = CurrencyCode::parse(&iso)?;
    SupportedCurrency::from_code(code)
        .map(|currency| Json(CurrencyInfo::from(currency)))
        .ok_or_else(|| RateError::NotFound(format!("Currency '{}' was not found", code)))
}

/// Handler for POST /api/swop/convert
///
/// Converts an amount at today's cached rate.
pub async fn convert_handler(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<Conversion>> {
    let (base, quote, amount) = req.validate()?;
    let conversion = state.rates.convert(base, quote, amount).await?;
    Ok(Json(conversion))
}

/// Handler for POST /api/swop/historical
///
/// Returns the week or month of daily rates up to today.
pub async fn historical_handler(
    State(state): State<AppState>,
    Json(req): Json<HistoricalRequest>,
) -> Result<Json<Vec<RateQuote>>> {
    let (base, quote, interval) = req.validate()?;
    let series = state.rates.historical_series(base, quote, interval).await?;
    Ok(Json(series))
}

/// Handler for POST /api/swop/widget
pub async fn widget_handler(
    State(state): State<AppState>,
    Json(req): Json<PairRequest>,
) -> Result<Json<WidgetQuote>> {
    let (base, quote) = req.validate()?;
    let widget = state.rates.widget_quote(base, quote).await?;
    Ok(Json(widget))
}

/// Handler for GET /api/swop/health
pub async fn upstream_health_handler(State(state): State<AppState>) -> Json<UpstreamHealthResponse> {
    Json(UpstreamHealthResponse {
        upstream: state.rates.upstream_healthy().await,
    })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.rates.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
