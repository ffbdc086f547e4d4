use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use doh_relay_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

/// First gate in front of every route: rejected requests never reach the
/// blocklist or the resolver.
pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(client) = client_ip(&request) else {
        // No source address available (non-socket transport); the
        // request cannot be attributed to a client window.
        debug!("Request without connect info bypasses rate limiting");
        return next.run(request).await;
    };

    if state.rate_limiter.admit(client) {
        next.run(request).await
    } else {
        ApiError(DomainError::RateLimited).into_response()
    }
}

fn client_ip(request: &Request) -> Option<IpAddr> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
}
