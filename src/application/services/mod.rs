//! Application services orchestrating business rules over repositories.

pub mod auth_service;
pub mod project_service;

pub use auth_service::{AuthService, Session};
pub use project_service::ProjectService;
