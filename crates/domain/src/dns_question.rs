use super::RecordType;
use std::sync::Arc;

/// The question half of a typed DNS query, echoed back in DoH-JSON
/// responses even when the query yields no answer.
#[derive(Debug, Clone)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
