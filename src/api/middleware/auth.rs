//! Session-cookie authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::api::handlers::auth::AUTH_COOKIE;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticates requests using the `auth_token` session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: auth_token=<signed session token>
/// ```
///
/// On success the decoded [`crate::application::services::Session`] is
/// inserted into the request extensions so handlers can read the caller's
/// identity and admin flag.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the cookie is missing, the signature does
/// not verify, or the session has expired.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(AUTH_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Session cookie is missing"}),
            )
        })?;

    let session = st.auth_service.authenticate(&token)?;
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
