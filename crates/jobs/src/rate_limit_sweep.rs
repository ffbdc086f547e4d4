use doh_relay_application::RateLimiterService;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Evicts rate-limiter entries for clients that have gone idle, so the
/// per-client key space does not grow for the life of the process.
pub struct RateLimitSweepJob {
    limiter: Arc<RateLimiterService>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RateLimitSweepJob {
    pub fn new(limiter: Arc<RateLimiterService>, interval_secs: u64) -> Self {
        Self {
            limiter,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting rate-limit sweep job");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("RateLimitSweepJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let evicted = self.limiter.sweep_idle();
                    if evicted > 0 {
                        debug!(
                            evicted = evicted,
                            remaining = self.limiter.tracked_clients(),
                            "Swept idle rate-limit clients"
                        );
                    }
                }
            }
        }
    }
}
