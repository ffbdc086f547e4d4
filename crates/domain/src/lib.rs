//! doh-relay Domain Layer
pub mod blocklist;
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod errors;

pub use blocklist::Blocklist;
pub use config::{CliOverrides, Config};
pub use dns_question::DnsQuestion;
pub use dns_record::{DnsRecord, RecordType};
pub use errors::DomainError;
