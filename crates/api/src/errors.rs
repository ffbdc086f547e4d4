use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use doh_relay_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            // 406 carries a plain-text body, not the JSON error shape.
            DomainError::NotAcceptable => {
                return (StatusCode::NOT_ACCEPTABLE, "Not Acceptable").into_response();
            }

            DomainError::Blocked | DomainError::UnsupportedRecordType(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.0.to_string()),

            DomainError::ResolutionFailure(_) | DomainError::Upstream(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }

            DomainError::ConfigError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
