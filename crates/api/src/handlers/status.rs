use crate::dto::{HealthResponse, StatusResponse};
use axum::Json;
use std::time::{SystemTime, UNIX_EPOCH};

pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        message: "Servidor DNS sobre HTTPS (educacional). Uso abusivo será bloqueado.",
    })
}

/// Liveness probe; also the target of the keep-alive self-ping.
pub async fn health_check() -> Json<HealthResponse> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);

    Json(HealthResponse {
        status: "alive",
        timestamp,
    })
}
