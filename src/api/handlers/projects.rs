//! Handlers for project endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::project::{
    CreateProjectRequest, IdentifierDto, LanguageDto, ProjectDto, ProjectLanguageRequest,
    RenameProjectRequest, SimpleProjectDto, TranslationDto,
};
use crate::api::extract::{ValidatedJson, required};
use crate::domain::entities::{Language, ProjectDetail, ProjectSummary};
use crate::error::AppError;
use crate::state::AppState;

fn language_to_dto(l: Language) -> LanguageDto {
    LanguageDto {
        iso_code: l.iso_code,
        name: l.name,
    }
}

fn summary_to_dto(p: ProjectSummary) -> SimpleProjectDto {
    SimpleProjectDto {
        id: p.id,
        name: p.name,
        base_language: language_to_dto(p.base_language),
        languages: p.languages.into_iter().map(language_to_dto).collect(),
    }
}

fn detail_to_dto(p: ProjectDetail) -> ProjectDto {
    ProjectDto {
        id: p.id,
        name: p.name,
        archived: p.archived,
        base_language: language_to_dto(p.base_language),
        languages: p.languages.into_iter().map(language_to_dto).collect(),
        identifiers: p
            .identifiers
            .into_iter()
            .map(|i| IdentifierDto {
                id: i.id,
                identifier: i.identifier,
                translations: i
                    .translations
                    .into_iter()
                    .map(|t| TranslationDto {
                        id: t.id,
                        translation: t.translation,
                        language: t.language_code,
                        approved: t.approved,
                        improvement_needed: t.improvement_needed,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Lists all active projects.
///
/// # Endpoint
///
/// `GET /projects/active`
pub async fn active_projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SimpleProjectDto>>, AppError> {
    let projects = state.project_service.list_projects(false).await?;
    Ok(Json(projects.into_iter().map(summary_to_dto).collect()))
}

/// Lists all archived projects.
///
/// # Endpoint
///
/// `GET /projects/archived`
pub async fn archived_projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SimpleProjectDto>>, AppError> {
    let projects = state.project_service.list_projects(true).await?;
    Ok(Json(projects.into_iter().map(summary_to_dto).collect()))
}

/// Returns one fully populated project.
///
/// # Endpoint
///
/// `GET /projects/{id}`
///
/// # Errors
///
/// Returns 404 if the id does not resolve.
pub async fn get_project_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProjectDto>, AppError> {
    let project = state.project_service.get_project(id).await?;
    Ok(Json(detail_to_dto(project)))
}

/// Creates a new project.
///
/// # Endpoint
///
/// `POST /projects`
///
/// # Errors
///
/// Returns 400 if `name` or `baseLanguageCode` is missing or empty.
/// Returns 409 if a project with the same name exists.
/// Returns 404 if the ISO code resolves to no language.
pub async fn create_project_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectDto>), AppError> {
    let name = required(payload.name, "name")?;
    let base_language_code = required(payload.base_language_code, "baseLanguageCode")?;

    let project = state
        .project_service
        .create_project(name, &base_language_code)
        .await?;

    Ok((StatusCode::CREATED, Json(detail_to_dto(project))))
}

/// Renames a project.
///
/// # Endpoint
///
/// `POST /projects/{id}/rename` (also accepts `PATCH`)
///
/// No uniqueness pre-check happens here; a colliding name surfaces the
/// store constraint as 409.
///
/// # Errors
///
/// Returns 400 if `name` is missing or empty.
/// Returns 404 if the id does not resolve.
pub async fn rename_project_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RenameProjectRequest>,
) -> Result<Json<ProjectDto>, AppError> {
    let name = required(payload.name, "name")?;

    let project = state.project_service.rename_project(id, &name).await?;
    Ok(Json(detail_to_dto(project)))
}

/// Archives a project. Idempotent; there is no un-archive endpoint.
///
/// # Endpoint
///
/// `POST /projects/{id}/archive`
///
/// # Errors
///
/// Returns 404 if the id does not resolve.
pub async fn archive_project_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProjectDto>, AppError> {
    let project = state.project_service.archive_project(id).await?;
    Ok(Json(detail_to_dto(project)))
}

/// Attaches a language to a project's language set.
///
/// # Endpoint
///
/// `POST /projects/{id}/languages`
///
/// # Errors
///
/// Returns 400 if `languageCode` is missing or empty.
/// Returns 404 if the project id or the ISO code does not resolve.
/// Returns 409 if the language is already attached.
pub async fn add_language_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProjectLanguageRequest>,
) -> Result<Json<ProjectDto>, AppError> {
    let language_code = required(payload.language_code, "languageCode")?;

    let project = state
        .project_service
        .add_language(id, &language_code)
        .await?;
    Ok(Json(detail_to_dto(project)))
}

/// Changes a project's base language, attaching it when missing.
///
/// # Endpoint
///
/// `POST /projects/{id}/baseLanguage`
///
/// # Errors
///
/// Returns 400 if `languageCode` is missing or empty.
/// Returns 404 if the project id or the ISO code does not resolve.
pub async fn set_base_language_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProjectLanguageRequest>,
) -> Result<Json<ProjectDto>, AppError> {
    let language_code = required(payload.language_code, "languageCode")?;

    let project = state
        .project_service
        .set_base_language(id, &language_code)
        .await?;
    Ok(Json(detail_to_dto(project)))
}
