//! DTOs for login and user management.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login credentials.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "loginName must not be empty"))]
    pub login_name: Option<String>,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
}

/// Request to create a user account. Admin only.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,

    #[validate(email(message = "mail must be a valid address"))]
    pub mail: Option<String>,

    #[serde(default)]
    pub admin: bool,
}

/// A user as surfaced to clients. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub mail: String,
    pub admin: bool,
}
