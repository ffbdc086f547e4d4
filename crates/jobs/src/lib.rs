//! doh-relay Background Jobs
//!
//! Fire-and-forget tasks with no influence on request-path correctness:
//! the keep-alive self-ping and the rate-limiter idle sweep.
pub mod keep_alive;
pub mod rate_limit_sweep;
pub mod runner;

pub use keep_alive::KeepAliveJob;
pub use rate_limit_sweep::RateLimitSweepJob;
pub use runner::JobRunner;
