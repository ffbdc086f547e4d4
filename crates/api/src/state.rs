use doh_relay_application::use_cases::{HandleDnsQueryUseCase, ResolveHostUseCase};
use doh_relay_application::RateLimiterService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_host: Arc<ResolveHostUseCase>,
    pub dns_query: Arc<HandleDnsQueryUseCase>,
    pub rate_limiter: Arc<RateLimiterService>,
}
