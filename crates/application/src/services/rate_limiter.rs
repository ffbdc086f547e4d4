use dashmap::DashMap;
use doh_relay_domain::config::RateLimitConfig;
use std::collections::VecDeque;
use std::net::IpAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// Sliding-window rate limiter keyed on the client source address.
///
/// One instance is built at process start and injected into the request
/// path; there is no ambient global state. Each client maps to the
/// timestamps of its admitted requests within the trailing window,
/// pruned lazily on access. Entries whose whole history has aged out are
/// evicted by [`sweep_idle`](Self::sweep_idle), run from a background
/// job so the key space does not grow without bound.
pub struct RateLimiterService {
    windows: DashMap<IpAddr, VecDeque<Instant>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiterService {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window,
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(
            config.max_requests,
            Duration::from_secs(config.window_seconds),
        )
    }

    /// Admit or reject a request from `client`. On admission the current
    /// timestamp is appended to the client's history.
    pub fn admit(&self, client: IpAddr) -> bool {
        self.admit_at(client, Instant::now())
    }

    /// Deterministic entry point: admission decision at an explicit
    /// instant.
    pub fn admit_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut history = self.windows.entry(client).or_default();

        while let Some(&oldest) = history.front() {
            if now.duration_since(oldest) >= self.window {
                history.pop_front();
            } else {
                break;
            }
        }

        if history.len() >= self.max_requests {
            debug!(client = %client, requests = history.len(), "Rate limit exceeded");
            return false;
        }

        history.push_back(now);
        true
    }

    /// Drop clients whose entire history has aged out of the window.
    /// Returns the number of evicted entries.
    pub fn sweep_idle(&self) -> usize {
        self.sweep_idle_at(Instant::now())
    }

    pub fn sweep_idle_at(&self, now: Instant) -> usize {
        let before = self.windows.len();
        self.windows.retain(|_, history| {
            history
                .back()
                .is_some_and(|&newest| now.duration_since(newest) < self.window)
        });
        before - self.windows.len()
    }

    /// Number of client keys currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}
