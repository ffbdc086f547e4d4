#![allow(dead_code)]

mod mock_resolver;

pub use mock_resolver::MockDnsResolver;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response, StatusCode},
    Router,
};
use doh_relay_api::{create_routes, AppState};
use doh_relay_application::use_cases::{HandleDnsQueryUseCase, ResolveHostUseCase};
use doh_relay_application::RateLimiterService;
use doh_relay_domain::Blocklist;
use http_body_util::BodyExt;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub fn test_app(resolver: Arc<MockDnsResolver>, limiter: Arc<RateLimiterService>) -> Router {
    let blocklist = Blocklist::default();
    let state = AppState {
        resolve_host: Arc::new(ResolveHostUseCase::new(resolver.clone(), blocklist.clone())),
        dns_query: Arc::new(HandleDnsQueryUseCase::new(resolver, blocklist)),
        rate_limiter: limiter,
    };
    create_routes(state)
}

/// App with a limiter generous enough to never interfere.
pub fn unlimited_app(resolver: Arc<MockDnsResolver>) -> Router {
    test_app(
        resolver,
        Arc::new(RateLimiterService::new(1000, Duration::from_secs(60))),
    )
}

pub struct RequestSpec<'a> {
    pub uri: &'a str,
    pub accept: Option<&'a str>,
    pub client: Option<SocketAddr>,
}

impl<'a> RequestSpec<'a> {
    pub fn new(uri: &'a str) -> Self {
        Self {
            uri,
            accept: None,
            client: None,
        }
    }

    pub fn accept(mut self, accept: &'a str) -> Self {
        self.accept = Some(accept);
        self
    }

    pub fn client(mut self, addr: SocketAddr) -> Self {
        self.client = Some(addr);
        self
    }
}

pub async fn send(app: Router, spec: RequestSpec<'_>) -> Response<Body> {
    let mut builder = Request::builder().uri(spec.uri);
    if let Some(accept) = spec.accept {
        builder = builder.header("accept", accept);
    }
    if let Some(addr) = spec.client {
        builder = builder.extension(ConnectInfo(addr));
    }
    let request = builder.body(Body::empty()).unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn get_json(app: Router, spec: RequestSpec<'_>) -> (StatusCode, Value) {
    let response = send(app, spec).await;
    let status = response.status();
    let body = body_string(response).await;
    (status, serde_json::from_str(&body).unwrap())
}
