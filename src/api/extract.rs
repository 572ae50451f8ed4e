//! Request extractors.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that reports every shape problem as a 400.
///
/// Axum's stock `Json` extractor answers malformed bodies with a mix of
/// 400/415/422 rejections; the API contract wants a single 400 with the
/// parser's message echoed. After deserialization the payload's
/// [`Validate`] rules run, so handlers receive only well-formed requests.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text(), json!({})))?;

        payload.validate().map_err(|errors| {
            AppError::bad_request(
                "Validation failed",
                serde_json::to_value(&errors).unwrap_or(Value::Null),
            )
        })?;

        Ok(Self(payload))
    }
}

/// Unwraps a required request field, rejecting absence with a 400 naming
/// the field.
pub fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| {
        AppError::bad_request(
            format!("missing required field `{field}`"),
            json!({ "field": field }),
        )
    })
}
