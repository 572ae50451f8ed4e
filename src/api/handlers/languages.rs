//! Handler for language listing.

use axum::{Json, extract::State};

use crate::api::dto::project::LanguageDto;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all languages the service knows about.
///
/// Languages are reference data maintained out of band (admin CLI); this
/// is the read side projects pick their codes from.
///
/// # Endpoint
///
/// `GET /languages`
pub async fn language_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageDto>>, AppError> {
    let languages = state.project_service.list_languages().await?;

    Ok(Json(
        languages
            .into_iter()
            .map(|l| LanguageDto {
                iso_code: l.iso_code,
                name: l.name,
            })
            .collect(),
    ))
}
