//! Language reference data.

/// A language a project can translate into.
///
/// Languages are reference data: they are created out of band (admin CLI)
/// and referenced by many projects. The ISO code is unique.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Language {
    pub id: i64,
    pub iso_code: String,
    pub name: String,
}

/// Input data for creating a new language.
#[derive(Debug, Clone)]
pub struct NewLanguage {
    pub iso_code: String,
    pub name: String,
}
