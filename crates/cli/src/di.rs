use doh_relay_api::AppState;
use doh_relay_application::use_cases::{HandleDnsQueryUseCase, ResolveHostUseCase};
use doh_relay_application::RateLimiterService;
use doh_relay_domain::{Blocklist, Config};
use doh_relay_infrastructure::HickoryDnsResolver;
use std::sync::Arc;
use tracing::warn;

/// Dependency wiring: one resolver adapter, one rate limiter, one use
/// case per endpoint, shared through `AppState`.
pub struct Services {
    pub app_state: AppState,
    pub rate_limiter: Arc<RateLimiterService>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let resolver = match HickoryDnsResolver::from_system_conf() {
            Ok(resolver) => resolver,
            Err(e) => {
                warn!(error = %e, "No usable system resolver config; using Cloudflare upstream");
                HickoryDnsResolver::cloudflare()
            }
        };
        let resolver = Arc::new(resolver);

        let blocklist = Blocklist::default();
        let rate_limiter = Arc::new(RateLimiterService::from_config(&config.rate_limit));

        let app_state = AppState {
            resolve_host: Arc::new(ResolveHostUseCase::new(
                resolver.clone(),
                blocklist.clone(),
            )),
            dns_query: Arc::new(HandleDnsQueryUseCase::new(resolver, blocklist)),
            rate_limiter: rate_limiter.clone(),
        };

        Self {
            app_state,
            rate_limiter,
        }
    }
}
