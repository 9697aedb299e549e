use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, routing::get};

use super::admin::admin_router;
use super::auth::auth_router;
use super::public::public_router;
use super::teacher::teacher_router;
use super::views::view_router;
use crate::auth::SecretHasher;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    pub hasher: SecretHasher,
    /// `None` keeps sessions until sign-out.
    pub session_ttl: Option<chrono::Duration>,
    pub allow_admin_registration: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            store,
            hasher: SecretHasher::new(),
            session_ttl: config.session_ttl()?,
            allow_admin_registration: config.allow_admin_registration,
        })
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/auth", auth_router())
        .nest("/api/v1/admin", admin_router())
        .nest("/api/v1", public_router().merge(teacher_router()))
        .merge(view_router())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
