pub mod resolver;

pub use resolver::HickoryDnsResolver;
