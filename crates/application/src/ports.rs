mod dns_resolver;

pub use dns_resolver::{DnsResolver, QueryOutcome};

// Re-export for convenience
pub use doh_relay_domain::DnsQuestion;
