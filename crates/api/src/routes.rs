use crate::handlers;
use crate::middleware::rate_limit;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/resolve", get(handlers::resolve))
        .route("/dns-query", get(handlers::dns_query))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce_rate_limit,
        ))
        .with_state(state)
}
