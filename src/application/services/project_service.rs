//! Project management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewProject, ProjectDetail, ProjectSummary};
use crate::domain::repositories::{LanguageRepository, ProjectRepository};
use crate::error::AppError;

/// Service for managing projects and their language assignments.
///
/// Business rules enforced here rather than in the store:
/// - a project name must be unique at creation time (checked before the
///   base-language lookup, so a duplicate name wins over an unknown code;
///   the store constraint backs the race)
/// - a language can be attached to a project at most once
/// - the base language is always a member of the project's language set
pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    languages: Arc<dyn LanguageRepository>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(projects: Arc<dyn ProjectRepository>, languages: Arc<dyn LanguageRepository>) -> Self {
        Self {
            projects,
            languages,
        }
    }

    /// Lists all known languages, ordered by ISO code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_languages(
        &self,
    ) -> Result<Vec<crate::domain::entities::Language>, AppError> {
        self.languages.list().await
    }

    /// Lists projects by archived state, base language and language set
    /// attached. Filtering happens in memory over the full listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_projects(&self, archived: bool) -> Result<Vec<ProjectSummary>, AppError> {
        let all = self.projects.list().await?;
        Ok(all.into_iter().filter(|p| p.archived == archived).collect())
    }

    /// Loads one fully populated project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_project(&self, id: i64) -> Result<ProjectDetail, AppError> {
        self.projects.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(project_id = id, "project not found");
            AppError::not_found("Project not found", json!({"id": id}))
        })
    }

    /// Creates a project with the given base language.
    ///
    /// The new project starts active with the language set `{base}`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a project with the same name
    /// exists, regardless of the rest of the payload.
    /// Returns [`AppError::NotFound`] if the ISO code resolves to no
    /// language; nothing is persisted in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_project(
        &self,
        name: String,
        base_language_code: &str,
    ) -> Result<ProjectDetail, AppError> {
        if self.projects.find_by_name(&name).await?.is_some() {
            return Err(AppError::conflict(
                "Project with same name already exists",
                json!({"name": name}),
            ));
        }

        let base = self.resolve_language(base_language_code).await?;

        self.projects
            .create(NewProject {
                name,
                base_language_id: base.id,
            })
            .await
    }

    /// Renames a project.
    ///
    /// No uniqueness re-check is performed here (asymmetric with create);
    /// a colliding name surfaces the store constraint as a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Conflict`] on a name collision.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn rename_project(&self, id: i64, name: &str) -> Result<ProjectDetail, AppError> {
        if !self.projects.rename(id, name).await? {
            tracing::warn!(project_id = id, "rename target not found");
            return Err(AppError::not_found("Project not found", json!({"id": id})));
        }
        self.get_project(id).await
    }

    /// Archives a project. Idempotent; there is no un-archive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn archive_project(&self, id: i64) -> Result<ProjectDetail, AppError> {
        if !self.projects.set_archived(id, true).await? {
            tracing::warn!(project_id = id, "archive target not found");
            return Err(AppError::not_found("Project not found", json!({"id": id})));
        }
        self.get_project(id).await
    }

    /// Attaches a language to a project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project id does not resolve,
    /// or (after the membership check) if the ISO code resolves to no
    /// language.
    /// Returns [`AppError::Conflict`] if the language is already attached.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_language(&self, id: i64, iso_code: &str) -> Result<ProjectDetail, AppError> {
        let project = self.get_project(id).await?;

        if project.contains_language(iso_code) {
            tracing::warn!(project_id = id, iso_code, "language already present in project");
            return Err(AppError::conflict(
                "Project already contains language",
                json!({"isoCode": iso_code}),
            ));
        }

        let language = self.resolve_language(iso_code).await?;

        self.projects.add_language(id, language.id).await?;
        self.get_project(id).await
    }

    /// Changes a project's base language, attaching it to the language set
    /// when it is not yet a member.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project id or the ISO code
    /// does not resolve.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn set_base_language(
        &self,
        id: i64,
        iso_code: &str,
    ) -> Result<ProjectDetail, AppError> {
        let language = match self.projects.find_by_id(id).await? {
            Some(_) => self.resolve_language(iso_code).await?,
            None => {
                tracing::warn!(project_id = id, "project not found");
                return Err(AppError::not_found("Project not found", json!({"id": id})));
            }
        };

        self.projects.set_base_language(id, language.id).await?;
        self.get_project(id).await
    }

    async fn resolve_language(
        &self,
        iso_code: &str,
    ) -> Result<crate::domain::entities::Language, AppError> {
        self.languages
            .find_by_iso_code(iso_code)
            .await?
            .ok_or_else(|| {
                tracing::warn!(iso_code, "language not found");
                AppError::not_found("Language not found", json!({"isoCode": iso_code}))
            })
    }
}
