//! Repository trait for language reference data.

use crate::domain::entities::{Language, NewLanguage};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for languages.
///
/// Languages are reference data created out of band (admin CLI); the HTTP
/// surface only reads them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    /// Lists all languages ordered by ISO code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Language>, AppError>;

    /// Finds a language by its ISO code (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_iso_code(&self, iso_code: &str) -> Result<Option<Language>, AppError>;

    /// Creates a new language.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the ISO code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_language: NewLanguage) -> Result<Language, AppError>;
}
