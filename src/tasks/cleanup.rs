//! Expiry Sweeper
//!
//! Background task that periodically removes expired rate entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::service::RateCacheService;

/// Spawns a background task that periodically purges expired cache entries.
///
/// Lookups already drop expired entries they touch; this sweep reclaims the
/// ones nobody asks for again. The returned handle is aborted on shutdown.
pub fn spawn_cleanup_task(service: RateCacheService, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = service.purge_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired rate entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
