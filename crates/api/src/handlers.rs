pub mod dns_query;
pub mod resolve;
pub mod status;

pub use dns_query::dns_query;
pub use resolve::resolve;
pub use status::{health_check, root};
