//! Authentication service: password verification and session tokens.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// An authenticated caller, decoded from a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub is_admin: bool,
    pub expires_at: i64,
}

/// Service for logging users in and validating session tokens.
///
/// Sessions are stateless: the token carries the user id, admin flag and
/// expiry, signed with HMAC-SHA256 under `signing_secret`. Nothing is
/// stored server-side, so a token stays valid until it expires. Passwords
/// are hashed with Argon2id; raw passwords never reach the store.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    signing_secret: String,
    session_ttl_seconds: i64,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository
    /// - `signing_secret` - HMAC key for session tokens
    /// - `session_ttl_seconds` - lifetime of issued sessions
    pub fn new(users: Arc<dyn UserRepository>, signing_secret: String, session_ttl_seconds: i64) -> Self {
        Self {
            users,
            signing_secret,
            session_ttl_seconds,
        }
    }

    /// Verifies credentials and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown username and
    /// [`AppError::Forbidden`] for a wrong password; the two cases are
    /// deliberately distinguishable, matching the established API contract.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, String), AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::warn!(username, "login attempt for unknown user");
                AppError::not_found("User not found", json!({"loginName": username}))
            })?;

        if !verify_password(&user.password_hash, password) {
            tracing::warn!(username, "login attempt with wrong password");
            return Err(AppError::forbidden("Wrong password", json!({})));
        }

        let token = self.issue_session(&user);
        Ok((user, token))
    }

    /// Creates a user account, hashing the password.
    ///
    /// The admin gate lives in the handler; this method only persists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn create_user(
        &self,
        username: String,
        password: &str,
        mail: String,
        is_admin: bool,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;
        self.users
            .create(NewUser {
                username,
                password_hash,
                mail,
                is_admin,
            })
            .await
    }

    /// Issues a signed session token for a user.
    ///
    /// Token layout: `v1.<user_id>.<admin flag>.<expiry unix>.<hex mac>`,
    /// where the MAC covers everything before it.
    pub fn issue_session(&self, user: &User) -> String {
        let expires_at = chrono::Utc::now().timestamp() + self.session_ttl_seconds;
        let payload = format!(
            "v1.{}.{}.{}",
            user.id,
            if user.is_admin { 1 } else { 0 },
            expires_at
        );
        let mac = self.sign(&payload);
        format!("{payload}.{mac}")
    }

    /// Validates a session token and decodes its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the token is malformed,
    /// carries a bad signature, or has expired.
    pub fn authenticate(&self, token: &str) -> Result<Session, AppError> {
        let reject = || AppError::unauthorized("Unauthorized", json!({"reason": "Invalid session"}));

        let (payload, signature) = token.rsplit_once('.').ok_or_else(reject)?;

        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .map_err(|_| reject())?;
        mac.update(payload.as_bytes());
        let signature_bytes = hex::decode(signature).map_err(|_| reject())?;
        mac.verify_slice(&signature_bytes).map_err(|_| reject())?;

        // Signature is valid from here on; the payload can be trusted.
        let mut parts = payload.split('.');
        let version = parts.next().ok_or_else(reject)?;
        if version != "v1" {
            return Err(reject());
        }
        let user_id: i64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(reject)?;
        let is_admin = match parts.next() {
            Some("1") => true,
            Some("0") => false,
            _ => return Err(reject()),
        };
        let expires_at: i64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(reject)?;

        if expires_at <= chrono::Utc::now().timestamp() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Session expired"}),
            ));
        }

        Ok(Session {
            user_id,
            is_admin,
            expires_at,
        })
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Hashes a password with Argon2id, producing a PHC-format string.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AppError::internal("Password hashing failed", json!({}))
        })
}

/// Verifies a password against a stored PHC-format hash.
pub fn verify_password(password_hash: &str, password: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
