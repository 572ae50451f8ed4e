//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and
//! `validator` for input validation through
//! [`crate::api::extract::ValidatedJson`].

pub mod auth;
pub mod project;
