use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub domain: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub domain: String,
    pub ip: String,
}
