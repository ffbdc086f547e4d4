use async_trait::async_trait;
use doh_relay_application::ports::{DnsResolver, QueryOutcome};
use doh_relay_domain::{DnsQuestion, DomainError};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted resolver double with an invocation counter, so API tests
/// can assert fail-fast paths never trigger resolution.
pub struct MockDnsResolver {
    host_responses: Mutex<HashMap<String, IpAddr>>,
    query_outcomes: Mutex<HashMap<String, QueryOutcome>>,
    query_errors: Mutex<HashMap<String, DomainError>>,
    calls: AtomicUsize,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            host_responses: Mutex::new(HashMap::new()),
            query_outcomes: Mutex::new(HashMap::new()),
            query_errors: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_host_response(&self, domain: &str, ip: &str) {
        self.host_responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), ip.parse().unwrap());
    }

    pub fn set_query_outcome(&self, name: &str, outcome: QueryOutcome) {
        self.query_outcomes
            .lock()
            .unwrap()
            .insert(name.to_string(), outcome);
    }

    pub fn set_query_error(&self, name: &str, error: DomainError) {
        self.query_errors
            .lock()
            .unwrap()
            .insert(name.to_string(), error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn lookup_host(&self, domain: &str) -> Result<IpAddr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.host_responses
            .lock()
            .unwrap()
            .get(domain)
            .copied()
            .ok_or_else(|| DomainError::ResolutionFailure(domain.to_string()))
    }

    async fn query(&self, question: &DnsQuestion) -> Result<QueryOutcome, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.query_errors.lock().unwrap().get(question.name.as_ref()) {
            return Err(error.clone());
        }

        Ok(self
            .query_outcomes
            .lock()
            .unwrap()
            .get(question.name.as_ref())
            .cloned()
            .unwrap_or(QueryOutcome::NoRecords))
    }
}
