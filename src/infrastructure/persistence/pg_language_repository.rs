//! PostgreSQL implementation of the language repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{Language, NewLanguage};
use crate::domain::repositories::LanguageRepository;
use crate::error::AppError;

/// Column list for language queries.
const LANGUAGE_COLUMNS: &str = "id, iso_code, name";

/// PostgreSQL repository for language reference data.
pub struct PgLanguageRepository {
    pool: Arc<PgPool>,
}

impl PgLanguageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageRepository for PgLanguageRepository {
    async fn list(&self) -> Result<Vec<Language>, AppError> {
        let query = format!("SELECT {LANGUAGE_COLUMNS} FROM languages ORDER BY iso_code");
        let languages = sqlx::query_as::<_, Language>(&query)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(languages)
    }

    async fn find_by_iso_code(&self, iso_code: &str) -> Result<Option<Language>, AppError> {
        let query = format!("SELECT {LANGUAGE_COLUMNS} FROM languages WHERE iso_code = $1");
        let language = sqlx::query_as::<_, Language>(&query)
            .bind(iso_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(language)
    }

    async fn create(&self, new_language: NewLanguage) -> Result<Language, AppError> {
        let query = format!(
            "INSERT INTO languages (iso_code, name)
             VALUES ($1, $2)
             RETURNING {LANGUAGE_COLUMNS}"
        );
        let language = sqlx::query_as::<_, Language>(&query)
            .bind(&new_language.iso_code)
            .bind(&new_language.name)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(language)
    }
}
