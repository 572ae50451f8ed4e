//! Handler for the health check endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Service health status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// Returns service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// The database check runs a trivial read through the language
/// repository; the endpoint itself always answers 200 and reports the
/// store state in the body.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.project_service.list_languages().await {
        Ok(_) => "ok".to_string(),
        Err(e) => format!("error: {e}"),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
