use crate::ports::DnsResolver;
use doh_relay_domain::{Blocklist, DomainError};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Simple forward lookup: blocklist gate, then resolve the domain to its
/// first address. The blocklist check is fail-fast; a blocked domain
/// never reaches the resolver.
pub struct ResolveHostUseCase {
    resolver: Arc<dyn DnsResolver>,
    blocklist: Blocklist,
}

impl ResolveHostUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, blocklist: Blocklist) -> Self {
        Self {
            resolver,
            blocklist,
        }
    }

    pub async fn execute(&self, domain: &str) -> Result<IpAddr, DomainError> {
        if self.blocklist.is_blocked(domain) {
            debug!(domain = %domain, "Domain rejected by blocklist");
            return Err(DomainError::Blocked);
        }

        let ip = self.resolver.lookup_host(domain).await?;

        debug!(domain = %domain, ip = %ip, "Host resolved");
        Ok(ip)
    }
}
