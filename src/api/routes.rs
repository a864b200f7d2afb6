//! API Routes
//!
//! Configures the Axum router with all rate endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    convert_handler, currencies_handler, currency_handler, health_handler, historical_handler,
    stats_handler, upstream_health_handler, widget_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (the widget is served from another host)
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/api/currencies", get(currencies_handler))
        .route("/api/currencies/:iso", get(currency_handler))
        .route("/api/swop/convert", post(convert_handler))
        .route("/api/swop/historical", post(historical_handler))
        .route("/api/swop/widget", post(widget_handler))
        .route("/api/swop/health", get(upstream_health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;
    use tower::util::ServiceExt;

    use crate::clock::ManualClock;
    use crate::service::test_support::StubProvider;
    use crate::service::RateCacheService;

    fn create_test_app() -> Router {
        let rates = RateCacheService::new(
            Arc::new(StubProvider::new(dec!(1.08))),
            Arc::new(ManualClock::new(Utc::now())),
            100,
            Duration::days(7),
        );
        create_router(AppState::new(rates))
    }

    async fn get_status(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(get_status("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(get_status("/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_currency_not_found() {
        assert_eq!(get_status("/api/currencies/GBP").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_currency_malformed_code() {
        assert_eq!(get_status("/api/currencies/EURO").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_widget_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/swop/widget")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"baseCurrency":"EUR","quoteCurrency":"USD"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
