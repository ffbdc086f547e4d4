use async_trait::async_trait;
use doh_relay_domain::{DnsQuestion, DnsRecord, DomainError};
use std::net::IpAddr;

/// Result of a typed DNS query.
///
/// `NoRecords` covers both NXDOMAIN and NODATA: the query itself was
/// valid but produced no answer. It is deliberately not an error so the
/// formatter can emit the Status=3 DoH-JSON shape; unexpected resolver
/// failures surface as `DomainError::Upstream` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Answered(Vec<DnsRecord>),
    NoRecords,
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Forward-resolve a host name to its first address, system-resolver
    /// semantics. Fails with `ResolutionFailure` when the name cannot be
    /// resolved at all.
    async fn lookup_host(&self, domain: &str) -> Result<IpAddr, DomainError>;

    /// Issue a typed query and yield the answer records in resolver
    /// order, with each record's textual payload rendering.
    async fn query(&self, question: &DnsQuestion) -> Result<QueryOutcome, DomainError>;
}
