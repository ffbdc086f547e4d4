pub mod dns_json;
pub mod resolve;
pub mod status;

pub use dns_json::{AnswerDto, DnsJsonResponse, DnsQueryParams, QuestionDto};
pub use resolve::{ResolveParams, ResolveResponse};
pub use status::{HealthResponse, StatusResponse};
