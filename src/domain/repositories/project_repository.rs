//! Repository trait for project storage.

use crate::domain::entities::{NewProject, Project, ProjectDetail, ProjectSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for projects and their language associations.
///
/// Both listing paths load the base language and the language set
/// eagerly; the detail path additionally loads identifiers and their
/// translations. Archived filtering is the caller's concern.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProjectRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryProjectRepository`] - in-memory store for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Lists all projects with base language and language set attached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<ProjectSummary>, AppError>;

    /// Loads one project by id with languages, identifiers and
    /// translations attached. `None` when the id does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ProjectDetail>, AppError>;

    /// Finds a project row by its exact name (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, AppError>;

    /// Creates a project and seeds its language set with the base language.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a project with the same name
    /// already exists (unique constraint).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_project: NewProject) -> Result<ProjectDetail, AppError>;

    /// Renames a project. Returns `false` when the id does not resolve.
    ///
    /// No uniqueness pre-check is performed; a colliding name surfaces the
    /// store constraint as [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a name collision.
    /// Returns [`AppError::Internal`] on database errors.
    async fn rename(&self, id: i64, name: &str) -> Result<bool, AppError>;

    /// Sets the archived flag. Returns `false` when the id does not
    /// resolve. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_archived(&self, id: i64, archived: bool) -> Result<bool, AppError>;

    /// Appends a language to the project's language set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the language is already a member
    /// (composite primary key).
    /// Returns [`AppError::Internal`] on database errors.
    async fn add_language(&self, project_id: i64, language_id: i64) -> Result<(), AppError>;

    /// Sets the base language and ensures it is a member of the language
    /// set (append when missing, never duplicated). Returns `false` when
    /// the project id does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_base_language(&self, project_id: i64, language_id: i64)
    -> Result<bool, AppError>;
}
