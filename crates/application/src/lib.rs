//! doh-relay Application Layer
//!
//! Ports and use cases for the request-handling pipeline: blocklist
//! check, record-type parsing, dispatch to the resolver port, plus the
//! sliding-window rate limiter service.
pub mod ports;
pub mod services;
pub mod use_cases;

pub use services::RateLimiterService;
