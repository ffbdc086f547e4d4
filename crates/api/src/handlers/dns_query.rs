use crate::dto::{DnsJsonResponse, DnsQueryParams};
use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    Json,
};
use doh_relay_application::ports::QueryOutcome;
use doh_relay_domain::DomainError;
use tracing::instrument;

const DNS_JSON_MEDIA_TYPE: &str = "application/dns-json";

#[instrument(skip(state, headers), name = "api_dns_query")]
pub async fn dns_query(
    State(state): State<AppState>,
    Query(params): Query<DnsQueryParams>,
    headers: HeaderMap,
) -> Result<Json<DnsJsonResponse>, ApiError> {
    // The Accept requirement holds regardless of query validity; nothing
    // else runs without it.
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !accept.contains(DNS_JSON_MEDIA_TYPE) {
        return Err(ApiError(DomainError::NotAcceptable));
    }

    let result = state
        .dns_query
        .execute(&params.name, &params.record_type)
        .await?;

    let body = match &result.outcome {
        QueryOutcome::Answered(records) => DnsJsonResponse::answered(&result.question, records),
        QueryOutcome::NoRecords => DnsJsonResponse::no_records(&result.question),
    };

    Ok(Json(body))
}
