use serde::{Deserialize, Serialize};

/// Sliding-window rate limiter tunables.
///
/// Best-effort and in-memory: state resets on restart and is not shared
/// across instances.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Requests admitted per client within one window.
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,

    /// Trailing window length in seconds.
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    /// How often idle client entries are swept out of the history map.
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_seconds: default_window_seconds(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

fn default_max_requests() -> usize {
    10
}

fn default_window_seconds() -> u64 {
    60
}

fn default_sweep_interval_seconds() -> u64 {
    300
}
