//! DTOs for project endpoints.
//!
//! Request bodies use camelCase keys (`baseLanguageCode`, `languageCode`);
//! required fields are `Option` so that presence is checked with a 400
//! instead of a generic deserialization rejection.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A language as surfaced to clients.
#[derive(Debug, Serialize)]
pub struct LanguageDto {
    pub iso_code: String,
    pub name: String,
}

/// Listing shape: no identifiers, no translation payloads.
#[derive(Debug, Serialize)]
pub struct SimpleProjectDto {
    pub id: i64,
    pub name: String,
    pub base_language: LanguageDto,
    /// Never null; an empty language set serializes as `[]`.
    pub languages: Vec<LanguageDto>,
}

/// Full project shape returned by detail and all mutations.
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: i64,
    pub name: String,
    pub archived: bool,
    pub base_language: LanguageDto,
    pub languages: Vec<LanguageDto>,
    pub identifiers: Vec<IdentifierDto>,
}

#[derive(Debug, Serialize)]
pub struct IdentifierDto {
    pub id: i64,
    pub identifier: String,
    pub translations: Vec<TranslationDto>,
}

/// A translation with its language flattened to the plain ISO code.
#[derive(Debug, Serialize)]
pub struct TranslationDto {
    pub id: i64,
    pub translation: String,
    pub language: String,
    pub approved: bool,
    pub improvement_needed: bool,
}

/// Request to create a project.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 16, message = "baseLanguageCode must not be empty"))]
    pub base_language_code: Option<String>,
}

/// Request to rename a project.
#[derive(Debug, Deserialize, Validate)]
pub struct RenameProjectRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: Option<String>,
}

/// Request carrying a language ISO code (add language, set base language).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLanguageRequest {
    #[validate(length(min = 1, max = 16, message = "languageCode must not be empty"))]
    pub language_code: Option<String>,
}
