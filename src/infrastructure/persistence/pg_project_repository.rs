//! PostgreSQL implementation of the project repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{
    IdentifierWithTranslations, Language, NewProject, Project, ProjectDetail, ProjectSummary,
};
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

/// Column list for project queries.
const PROJECT_COLUMNS: &str = "id, name, archived, base_language_id, created_at";

/// A project row joined with its base language.
#[derive(sqlx::FromRow)]
struct ProjectWithBaseRow {
    id: i64,
    name: String,
    archived: bool,
    base_id: i64,
    base_iso_code: String,
    base_name: String,
}

impl ProjectWithBaseRow {
    fn base_language(&self) -> Language {
        Language {
            id: self.base_id,
            iso_code: self.base_iso_code.clone(),
            name: self.base_name.clone(),
        }
    }
}

/// A language-set membership row.
#[derive(sqlx::FromRow)]
struct MembershipRow {
    project_id: i64,
    id: i64,
    iso_code: String,
    name: String,
}

/// A translation row tagged with its owning identifier.
#[derive(sqlx::FromRow)]
struct TranslationRow {
    identifier_id: i64,
    id: i64,
    translation: String,
    language_code: String,
    approved: bool,
    improvement_needed: bool,
}

#[derive(sqlx::FromRow)]
struct IdentifierRow {
    id: i64,
    identifier: String,
}

/// PostgreSQL repository for projects.
///
/// The language set lives in `project_languages`; its composite primary
/// key and the unique constraint on `projects.name` back the
/// check-then-act sequences in the service layer.
pub struct PgProjectRepository {
    pool: Arc<PgPool>,
}

impl PgProjectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_languages(&self, project_id: i64) -> Result<Vec<Language>, AppError> {
        let languages = sqlx::query_as::<_, Language>(
            "SELECT l.id, l.iso_code, l.name
             FROM project_languages pl
             JOIN languages l ON l.id = pl.language_id
             WHERE pl.project_id = $1
             ORDER BY l.id",
        )
        .bind(project_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(languages)
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn list(&self) -> Result<Vec<ProjectSummary>, AppError> {
        let projects = sqlx::query_as::<_, ProjectWithBaseRow>(
            "SELECT p.id, p.name, p.archived,
                    l.id AS base_id, l.iso_code AS base_iso_code, l.name AS base_name
             FROM projects p
             JOIN languages l ON l.id = p.base_language_id
             ORDER BY p.id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let memberships = sqlx::query_as::<_, MembershipRow>(
            "SELECT pl.project_id, l.id, l.iso_code, l.name
             FROM project_languages pl
             JOIN languages l ON l.id = pl.language_id
             ORDER BY pl.project_id, l.id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_project: HashMap<i64, Vec<Language>> = HashMap::new();
        for row in memberships {
            by_project.entry(row.project_id).or_default().push(Language {
                id: row.id,
                iso_code: row.iso_code,
                name: row.name,
            });
        }

        Ok(projects
            .into_iter()
            .map(|row| {
                let base_language = row.base_language();
                ProjectSummary {
                    id: row.id,
                    name: row.name,
                    archived: row.archived,
                    base_language,
                    languages: by_project.remove(&row.id).unwrap_or_default(),
                }
            })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProjectDetail>, AppError> {
        let Some(project) = sqlx::query_as::<_, ProjectWithBaseRow>(
            "SELECT p.id, p.name, p.archived,
                    l.id AS base_id, l.iso_code AS base_iso_code, l.name AS base_name
             FROM projects p
             JOIN languages l ON l.id = p.base_language_id
             WHERE p.id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?
        else {
            return Ok(None);
        };

        let languages = self.load_languages(id).await?;

        let identifier_rows = sqlx::query_as::<_, IdentifierRow>(
            "SELECT id, identifier FROM identifiers WHERE project_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let translation_rows = sqlx::query_as::<_, TranslationRow>(
            "SELECT t.identifier_id, t.id, t.translation,
                    l.iso_code AS language_code, t.approved, t.improvement_needed
             FROM translations t
             JOIN languages l ON l.id = t.language_id
             JOIN identifiers i ON i.id = t.identifier_id
             WHERE i.project_id = $1
             ORDER BY t.id",
        )
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut translations_by_identifier: HashMap<i64, Vec<_>> = HashMap::new();
        for row in translation_rows {
            translations_by_identifier
                .entry(row.identifier_id)
                .or_default()
                .push(crate::domain::entities::Translation {
                    id: row.id,
                    translation: row.translation,
                    language_code: row.language_code,
                    approved: row.approved,
                    improvement_needed: row.improvement_needed,
                });
        }

        let identifiers = identifier_rows
            .into_iter()
            .map(|row| IdentifierWithTranslations {
                id: row.id,
                identifier: row.identifier,
                translations: translations_by_identifier
                    .remove(&row.id)
                    .unwrap_or_default(),
            })
            .collect();

        let base_language = project.base_language();
        Ok(Some(ProjectDetail {
            id: project.id,
            name: project.name,
            archived: project.archived,
            base_language,
            languages,
            identifiers,
        }))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, AppError> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE name = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(project)
    }

    async fn create(&self, new_project: NewProject) -> Result<ProjectDetail, AppError> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (name, archived, base_language_id)
             VALUES ($1, FALSE, $2)
             RETURNING {PROJECT_COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&new_project.name)
            .bind(new_project.base_language_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| remap_conflict(e, "Project with same name already exists"))?;

        sqlx::query("INSERT INTO project_languages (project_id, language_id) VALUES ($1, $2)")
            .bind(project.id)
            .bind(new_project.base_language_id)
            .execute(&mut *tx)
            .await?;

        let base_language = sqlx::query_as::<_, Language>(
            "SELECT id, iso_code, name FROM languages WHERE id = $1",
        )
        .bind(new_project.base_language_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ProjectDetail {
            id: project.id,
            name: project.name,
            archived: project.archived,
            base_language: base_language.clone(),
            languages: vec![base_language],
            identifiers: vec![],
        })
    }

    async fn rename(&self, id: i64, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE projects SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| remap_conflict(e, "Project with same name already exists"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_archived(&self, id: i64, archived: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE projects SET archived = $2 WHERE id = $1")
            .bind(id)
            .bind(archived)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_language(&self, project_id: i64, language_id: i64) -> Result<(), AppError> {
        sqlx::query("INSERT INTO project_languages (project_id, language_id) VALUES ($1, $2)")
            .bind(project_id)
            .bind(language_id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| remap_conflict(e, "Project already contains language"))?;

        Ok(())
    }

    async fn set_base_language(
        &self,
        project_id: i64,
        language_id: i64,
    ) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE projects SET base_language_id = $2 WHERE id = $1")
            .bind(project_id)
            .bind(language_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO project_languages (project_id, language_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(language_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}

/// Rewrites a unique-violation conflict with a caller-facing message; all
/// other database errors pass through the standard mapping.
fn remap_conflict(e: sqlx::Error, message: &str) -> AppError {
    match AppError::from(e) {
        AppError::Conflict { details, .. } => AppError::Conflict {
            message: message.to_string(),
            details,
        },
        other => other,
    }
}
