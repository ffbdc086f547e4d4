use crate::ports::{DnsResolver, QueryOutcome};
use doh_relay_domain::{Blocklist, DnsQuestion, DomainError, RecordType};
use std::sync::Arc;
use tracing::debug;

/// Outcome of a typed query together with the parsed question, which the
/// formatter echoes back even when there is no answer.
#[derive(Debug)]
pub struct QueryResult {
    pub question: DnsQuestion,
    pub outcome: QueryOutcome,
}

/// Full typed DNS query: blocklist gate, record-type parsing, then
/// dispatch to the resolver port.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
    blocklist: Blocklist,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, blocklist: Blocklist) -> Self {
        Self {
            resolver,
            blocklist,
        }
    }

    pub async fn execute(&self, name: &str, record_type: &str) -> Result<QueryResult, DomainError> {
        if self.blocklist.is_blocked(name) {
            debug!(domain = %name, "Domain rejected by blocklist");
            return Err(DomainError::Blocked);
        }

        // An unknown type string is a client error, reported before any
        // resolver work.
        let record_type: RecordType = record_type.parse()?;
        let question = DnsQuestion::new(name, record_type);

        let outcome = self.resolver.query(&question).await?;

        match &outcome {
            QueryOutcome::Answered(records) => {
                debug!(
                    domain = %name,
                    record_type = %record_type,
                    answers = records.len(),
                    "DNS query answered"
                );
            }
            QueryOutcome::NoRecords => {
                debug!(domain = %name, record_type = %record_type, "DNS query returned no records");
            }
        }

        Ok(QueryResult { question, outcome })
    }
}
