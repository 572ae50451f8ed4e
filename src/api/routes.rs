//! API route configuration.
//!
//! Reads, login and health are public; every mutating route sits behind
//! the session middleware in [`crate::routes::app_router`].

use crate::api::handlers::{
    active_projects_handler, add_language_handler, archive_project_handler,
    archived_projects_handler, create_project_handler, create_user_handler, get_project_handler,
    health_handler, language_list_handler, login_handler, logout_handler, rename_project_handler,
    set_base_language_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Routes reachable without a session.
///
/// # Endpoints
///
/// - `GET  /health`             - Health check
/// - `POST /login`              - Start a session
/// - `GET  /logout`             - End the session
/// - `GET  /languages`          - List languages (reference data)
/// - `GET  /projects/active`    - List active projects
/// - `GET  /projects/archived`  - List archived projects
/// - `GET  /projects/{id}`      - Full project detail
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/login", post(login_handler))
        .route("/logout", get(logout_handler))
        .route("/languages", get(language_list_handler))
        .route("/projects/active", get(active_projects_handler))
        .route("/projects/archived", get(archived_projects_handler))
        .route("/projects/{id}", get(get_project_handler))
}

/// Routes requiring a valid session cookie.
///
/// # Endpoints
///
/// - `POST       /projects`                    - Create a project
/// - `POST/PATCH /projects/{id}/rename`        - Rename a project
/// - `POST       /projects/{id}/archive`       - Archive a project (idempotent)
/// - `POST       /projects/{id}/languages`     - Attach a language
/// - `POST       /projects/{id}/baseLanguage`  - Change the base language
/// - `POST       /users`                       - Create a user (admin only)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project_handler))
        .route(
            "/projects/{id}/rename",
            patch(rename_project_handler).post(rename_project_handler),
        )
        .route("/projects/{id}/archive", post(archive_project_handler))
        .route("/projects/{id}/languages", post(add_language_handler))
        .route(
            "/projects/{id}/baseLanguage",
            post(set_base_language_handler),
        )
        .route("/users", post(create_user_handler))
}
