//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod languages;
pub mod projects;

pub use auth::{create_user_handler, login_handler, logout_handler};
pub use health::health_handler;
pub use languages::language_list_handler;
pub use projects::{
    active_projects_handler, add_language_handler, archive_project_handler,
    archived_projects_handler, create_project_handler, get_project_handler,
    rename_project_handler, set_base_language_handler,
};
