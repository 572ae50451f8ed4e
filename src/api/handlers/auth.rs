//! Handlers for login, logout and user management.

use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::auth::{CreateUserRequest, LoginRequest, UserDto};
use crate::api::extract::{ValidatedJson, required};
use crate::application::services::Session;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "auth_token";

fn user_to_dto(u: User) -> UserDto {
    UserDto {
        id: u.id,
        username: u.username,
        mail: u.mail,
        admin: u.is_admin,
    }
}

/// Verifies credentials and starts a session.
///
/// # Endpoint
///
/// `POST /login`
///
/// On success the session token is set as an HttpOnly cookie.
///
/// # Errors
///
/// Returns 400 if `loginName` or `password` is missing.
/// Returns 404 for an unknown user, 403 for a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let login_name = required(payload.login_name, "loginName")?;
    let password = required(payload.password, "password")?;

    let (user, token) = state.auth_service.login(&login_name, &password).await?;

    let cookie = format!("{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(user_to_dto(user)),
    ))
}

/// Ends the session by expiring the cookie. Always succeeds.
///
/// # Endpoint
///
/// `GET /logout`
pub async fn logout_handler() -> impl IntoResponse {
    let cookie = format!("{AUTH_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    (
        [(header::SET_COOKIE, cookie)],
        Json(json!({"status": "logged out"})),
    )
}

/// Creates a user account. Admin only.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 on missing/invalid fields.
/// Returns 401 without a session, 403 for a non-admin session.
/// Returns 409 if the username is taken.
pub async fn create_user_handler(
    Extension(session): Extension<Session>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    if !session.is_admin {
        return Err(AppError::forbidden(
            "Admin privileges required",
            json!({}),
        ));
    }

    let name = required(payload.name, "name")?;
    let password = required(payload.password, "password")?;
    let mail = required(payload.mail, "mail")?;

    let user = state
        .auth_service
        .create_user(name, &password, mail, payload.admin)
        .await?;

    Ok((StatusCode::CREATED, Json(user_to_dto(user))))
}
