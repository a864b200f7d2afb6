//! API Module
//!
//! HTTP handlers and routing for the rate API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Rate cache statistics
//! - `GET /api/currencies` - Supported currency catalog
//! - `GET /api/currencies/:iso` - One catalog entry
//! - `POST /api/swop/convert` - Convert an amount at today's rate
//! - `POST /api/swop/historical` - Daily rates for the last week or month
//! - `POST /api/swop/widget` - Current rate, recent days and volatility
//! - `GET /api/swop/health` - Upstream reachability

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
