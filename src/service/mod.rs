//! Service Module
//!
//! The rate cache and the computations built on top of it.

mod rate_cache;
mod widget;

#[cfg(test)]
pub(crate) mod test_support;

pub use rate_cache::{CachedRate, RateCacheService};
pub use widget::{percent_diff, volatility};
