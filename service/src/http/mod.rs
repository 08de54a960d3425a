//! HTTP routing and middleware.
//!
//! [`build_router`] is the single place the application's routes and layers
//! are assembled; `main.rs` and the integration tests both go through it.

pub mod security;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::SecurityHeadersConfig;
use crate::page::{self, PageState};

pub use security::{build_security_headers, security_headers_middleware, with_security_headers};

// Liveness check
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Assemble the full application router.
///
/// Layer order (innermost first):
/// 1. Routes (page, health)
/// 2. Page state extension
/// 3. Request tracing
/// 4. Security headers (outermost, when enabled)
pub fn build_router(state: PageState, security_headers: &SecurityHeadersConfig) -> Router {
    let app = page::router()
        .route("/health", get(health_check))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http());

    with_security_headers(app, security_headers)
}
