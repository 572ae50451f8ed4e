//! String identifier entity.

use crate::domain::entities::translation::Translation;

/// A string key within a project representing one translatable string.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Identifier {
    pub id: i64,
    pub identifier: String,
    pub project_id: i64,
}

/// An identifier with its translations attached, as surfaced through the
/// full project view.
#[derive(Debug, Clone)]
pub struct IdentifierWithTranslations {
    pub id: i64,
    pub identifier: String,
    pub translations: Vec<Translation>,
}
