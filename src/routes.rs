//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`          - Create a short link from a form-submitted URL
//! - `GET  /{token}`   - Redirect a token to its stored URL
//! - `GET  /health`    - Health check (database probe)
//!
//! Static routes take priority over the `{token}` capture, so `/health`
//! never shadows a token lookup and vice versa.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
