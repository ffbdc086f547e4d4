mod handle_dns_query;
mod resolve_host;

pub use handle_dns_query::{HandleDnsQueryUseCase, QueryResult};
pub use resolve_host::ResolveHostUseCase;
