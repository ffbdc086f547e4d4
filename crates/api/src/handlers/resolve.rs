use crate::dto::{ResolveParams, ResolveResponse};
use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::instrument;

#[instrument(skip(state), name = "api_resolve")]
pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let ip = state.resolve_host.execute(&params.domain).await?;

    Ok(Json(ResolveResponse {
        domain: params.domain,
        ip: ip.to_string(),
    }))
}
