//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, ProjectService};

/// Handler-visible application state.
///
/// Carries the services only; the store handle lives inside the
/// repositories the services were built over, so tests can swap in the
/// in-memory implementations without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<ProjectService>,
    pub auth_service: Arc<AuthService>,
}
