//! SWOP Cache - exchange rate cache in front of the SWOP GraphQL API
//!
//! Memoizes latest and historical rate lookups per UTC day, caches missing
//! historical data, and derives conversion, series and volatility views on top.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod currency;
pub mod error;
pub mod models;
pub mod provider;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::RateCacheService;
pub use tasks::spawn_cleanup_task;
