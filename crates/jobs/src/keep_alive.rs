use doh_relay_domain::config::KeepAliveConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Periodic self-ping against the service's own `/health` endpoint.
///
/// Failures are logged and swallowed; the job shares no mutable state
/// with the request path.
pub struct KeepAliveJob {
    url: String,
    interval_secs: u64,
    timeout_secs: u64,
    shutdown: CancellationToken,
}

impl KeepAliveJob {
    pub fn new(url: String, config: &KeepAliveConfig) -> Self {
        Self {
            url,
            interval_secs: config.interval_seconds,
            timeout_secs: config.timeout_seconds,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(url = %self.url, interval_secs = self.interval_secs, "Starting keep-alive job");

        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                error!(error = %e, "Failed to build keep-alive HTTP client");
                return;
            }
        };

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        // The first tick fires immediately; skip it so the server has
        // come up before the first ping.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("KeepAliveJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match client.get(&self.url).send().await {
                        Ok(response) => {
                            debug!(status = %response.status(), "Keep-alive ping sent");
                        }
                        Err(e) => {
                            warn!(error = %e, "Keep-alive ping failed");
                        }
                    }
                }
            }
        }
    }
}
