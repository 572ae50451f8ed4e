//! User entity for authentication and user management.

use chrono::{DateTime, Utc};

/// An account that can log in to the service.
///
/// `password_hash` is an Argon2id PHC string; the raw password never
/// touches the store.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub mail: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub mail: String,
    pub is_admin: bool,
}
