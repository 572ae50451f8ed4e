//! Translation entity.

/// The text of an identifier in one specific language.
///
/// `language_code` carries the ISO code of the tagged language; the full
/// language row is not loaded for translations. Revision history for
/// translations lives in the `revisions` table, written by the
/// translation-editing surface; nothing here reads it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Translation {
    pub id: i64,
    pub translation: String,
    pub language_code: String,
    pub approved: bool,
    pub improvement_needed: bool,
}
