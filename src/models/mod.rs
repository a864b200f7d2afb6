//! Rate models and the request/response DTOs for the API
//!
//! This module defines the values the rate cache produces and the DTOs used
//! for serializing/deserializing HTTP request and response bodies.

pub mod rates;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use rates::{Conversion, HistoricalInterval, RateQuote, WidgetQuote};
pub use requests::{ConvertRequest, HistoricalRequest, PairRequest};
pub use responses::{HealthResponse, StatsResponse, UpstreamHealthResponse};
