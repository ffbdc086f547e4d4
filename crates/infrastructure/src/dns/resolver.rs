use async_trait::async_trait;
use doh_relay_application::ports::{DnsResolver, QueryOutcome};
use doh_relay_domain::{DnsQuestion, DnsRecord, DomainError, RecordType};
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::Resolver;
use std::net::{IpAddr, ToSocketAddrs};
use tracing::{debug, warn};

/// Resolver adapter backed by hickory for typed queries and by the
/// system resolver (offloaded to the blocking pool) for simple forward
/// lookups.
pub struct HickoryDnsResolver {
    resolver: Resolver<TokioConnectionProvider>,
}

impl HickoryDnsResolver {
    pub fn with_config(config: ResolverConfig) -> Self {
        let resolver =
            Resolver::builder_with_config(config, TokioConnectionProvider::default()).build();
        Self { resolver }
    }

    /// Build from the host's resolver configuration (/etc/resolv.conf).
    pub fn from_system_conf() -> Result<Self, DomainError> {
        let resolver = Resolver::builder_tokio()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?
            .build();
        Ok(Self { resolver })
    }

    pub fn cloudflare() -> Self {
        Self::with_config(ResolverConfig::cloudflare())
    }

    fn to_hickory_type(record_type: RecordType) -> hickory_proto::rr::RecordType {
        use hickory_proto::rr::RecordType as HickoryRecordType;

        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::NAPTR => HickoryRecordType::NAPTR,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::DS => HickoryRecordType::DS,
            RecordType::DNSKEY => HickoryRecordType::DNSKEY,
            RecordType::TLSA => HickoryRecordType::TLSA,
            RecordType::SVCB => HickoryRecordType::SVCB,
            RecordType::HTTPS => HickoryRecordType::HTTPS,
        }
    }
}

#[async_trait]
impl DnsResolver for HickoryDnsResolver {
    async fn lookup_host(&self, domain: &str) -> Result<IpAddr, DomainError> {
        let domain = domain.to_string();
        let lookup_domain = domain.clone();

        // getaddrinfo blocks; run it on the blocking pool so request
        // handling never stalls the scheduler.
        let result = tokio::task::spawn_blocking(move || {
            (lookup_domain.as_str(), 0)
                .to_socket_addrs()
                .map(|mut addrs| addrs.next().map(|addr| addr.ip()))
        })
        .await
        .map_err(|e| DomainError::Upstream(e.to_string()))?;

        match result {
            Ok(Some(ip)) => {
                debug!(domain = %domain, ip = %ip, "System lookup resolved");
                Ok(ip)
            }
            Ok(None) => Err(DomainError::ResolutionFailure(domain)),
            Err(e) => {
                debug!(domain = %domain, error = %e, "System lookup failed");
                Err(DomainError::ResolutionFailure(domain))
            }
        }
    }

    async fn query(&self, question: &DnsQuestion) -> Result<QueryOutcome, DomainError> {
        let hickory_type = Self::to_hickory_type(question.record_type);

        let lookup = match self.resolver.lookup(question.name.as_ref(), hickory_type).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let error_msg = e.to_string();

                // "No records found" is not an error: it is a valid DNS
                // response (NXDOMAIN or NODATA).
                if error_msg.contains("no records found")
                    || error_msg.contains("NoRecordsFound")
                    || error_msg.contains("no records")
                {
                    debug!(
                        domain = %question.name,
                        record_type = %question.record_type,
                        "No records found"
                    );
                    return Ok(QueryOutcome::NoRecords);
                }

                warn!(
                    domain = %question.name,
                    record_type = %question.record_type,
                    error = %e,
                    "DNS lookup failed"
                );
                return Err(DomainError::Upstream(error_msg));
            }
        };

        let mut records = Vec::new();
        for record in lookup.record_iter() {
            let code = u16::from(record.record_type());
            let Some(record_type) = RecordType::from_u16(code) else {
                debug!(
                    domain = %question.name,
                    type_code = code,
                    "Skipping record of unmapped type"
                );
                continue;
            };

            records.push(DnsRecord::new(
                record.name().to_utf8(),
                record_type,
                record.ttl(),
                record.data().to_string(),
            ));
        }

        if records.is_empty() {
            return Ok(QueryOutcome::NoRecords);
        }

        Ok(QueryOutcome::Answered(records))
    }
}
