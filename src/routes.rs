//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - Reads, `/login`, `/logout`, `/health` - public
//! - Project mutations and `/users` - session cookie required
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Authentication** - session cookie on mutating routes
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
