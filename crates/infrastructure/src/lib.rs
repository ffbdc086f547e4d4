//! doh-relay Infrastructure Layer
pub mod dns;

pub use dns::HickoryDnsResolver;
