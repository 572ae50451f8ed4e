//! Project entity and its aggregate views.

use chrono::{DateTime, Utc};

use crate::domain::entities::identifier::IdentifierWithTranslations;
use crate::domain::entities::language::Language;

/// A translatable unit with one base language and N target languages.
///
/// Projects are never hard-deleted; `archived` is a terminal soft-delete
/// flag with no reverse transition. The base language is always a member
/// of the project's language set (enforced by the service layer on create
/// and on base-language change).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub archived: bool,
    pub base_language_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new project.
///
/// New projects start active, with the language set initialized to exactly
/// the base language.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub base_language_id: i64,
}

/// A project with its base language and language set attached.
///
/// Used by the listing endpoints; identifiers are not loaded.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub id: i64,
    pub name: String,
    pub archived: bool,
    pub base_language: Language,
    pub languages: Vec<Language>,
}

/// A fully loaded project: languages, identifiers and their translations.
#[derive(Debug, Clone)]
pub struct ProjectDetail {
    pub id: i64,
    pub name: String,
    pub archived: bool,
    pub base_language: Language,
    pub languages: Vec<Language>,
    pub identifiers: Vec<IdentifierWithTranslations>,
}

impl ProjectDetail {
    /// Whether the project's language set contains the given ISO code
    /// (case-sensitive exact match).
    pub fn contains_language(&self, iso_code: &str) -> bool {
        self.languages.iter().any(|l| l.iso_code == iso_code)
    }
}
