//! In-memory repository implementations.
//!
//! A single [`MemoryDb`] backs one repository instance per trait, all
//! sharing the same store. The implementations mirror the PostgreSQL
//! constraint behavior (unique names, unique ISO codes, unique usernames,
//! at-most-once language membership) so integration tests exercise the
//! same conflict paths without a database.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{
    IdentifierWithTranslations, Language, NewLanguage, NewProject, NewUser, Project,
    ProjectDetail, ProjectSummary, Translation, User,
};
use crate::domain::repositories::{LanguageRepository, ProjectRepository, UserRepository};
use crate::error::AppError;

#[derive(Debug, Clone)]
struct StoredProject {
    id: i64,
    name: String,
    archived: bool,
    base_language_id: i64,
    language_ids: Vec<i64>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct StoredIdentifier {
    id: i64,
    identifier: String,
    project_id: i64,
}

#[derive(Debug, Clone)]
struct StoredTranslation {
    id: i64,
    translation: String,
    identifier_id: i64,
    language_id: i64,
    approved: bool,
    improvement_needed: bool,
}

#[derive(Debug, Default)]
struct Store {
    languages: Vec<Language>,
    projects: Vec<StoredProject>,
    identifiers: Vec<StoredIdentifier>,
    translations: Vec<StoredTranslation>,
    users: Vec<User>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn language(&self, id: i64) -> Option<Language> {
        self.languages.iter().find(|l| l.id == id).cloned()
    }

    fn summary(&self, project: &StoredProject) -> ProjectSummary {
        ProjectSummary {
            id: project.id,
            name: project.name.clone(),
            archived: project.archived,
            base_language: self
                .language(project.base_language_id)
                .unwrap_or_else(|| Language {
                    id: project.base_language_id,
                    iso_code: String::new(),
                    name: String::new(),
                }),
            languages: project
                .language_ids
                .iter()
                .filter_map(|&id| self.language(id))
                .collect(),
        }
    }

    fn detail(&self, project: &StoredProject) -> ProjectDetail {
        let summary = self.summary(project);
        let identifiers = self
            .identifiers
            .iter()
            .filter(|i| i.project_id == project.id)
            .map(|i| IdentifierWithTranslations {
                id: i.id,
                identifier: i.identifier.clone(),
                translations: self
                    .translations
                    .iter()
                    .filter(|t| t.identifier_id == i.id)
                    .map(|t| Translation {
                        id: t.id,
                        translation: t.translation.clone(),
                        language_code: self
                            .language(t.language_id)
                            .map(|l| l.iso_code)
                            .unwrap_or_default(),
                        approved: t.approved,
                        improvement_needed: t.improvement_needed,
                    })
                    .collect(),
            })
            .collect();

        ProjectDetail {
            id: summary.id,
            name: summary.name,
            archived: summary.archived,
            base_language: summary.base_language,
            languages: summary.languages,
            identifiers,
        }
    }
}

/// Handle to a shared in-memory store.
///
/// Clones share the same data. Seed methods cover what the admin CLI and
/// the out-of-scope translation surface would normally write.
#[derive(Clone, Default)]
pub struct MemoryDb {
    store: Arc<RwLock<Store>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> MemoryProjectRepository {
        MemoryProjectRepository {
            store: self.store.clone(),
        }
    }

    pub fn languages(&self) -> MemoryLanguageRepository {
        MemoryLanguageRepository {
            store: self.store.clone(),
        }
    }

    pub fn users(&self) -> MemoryUserRepository {
        MemoryUserRepository {
            store: self.store.clone(),
        }
    }

    /// Seeds a language, returning it.
    pub fn seed_language(&self, iso_code: &str, name: &str) -> Language {
        let mut store = self.store.write().expect("store lock poisoned");
        let id = store.next_id();
        let language = Language {
            id,
            iso_code: iso_code.to_string(),
            name: name.to_string(),
        };
        store.languages.push(language.clone());
        language
    }

    /// Seeds a project with the given base language and language set
    /// (ISO codes must already be seeded). Returns the project id.
    pub fn seed_project(
        &self,
        name: &str,
        base_iso_code: &str,
        language_iso_codes: &[&str],
        archived: bool,
    ) -> i64 {
        let mut store = self.store.write().expect("store lock poisoned");
        let base_language_id = store
            .languages
            .iter()
            .find(|l| l.iso_code == base_iso_code)
            .map(|l| l.id)
            .expect("base language must be seeded first");
        let language_ids = language_iso_codes
            .iter()
            .map(|iso| {
                store
                    .languages
                    .iter()
                    .find(|l| l.iso_code == *iso)
                    .map(|l| l.id)
                    .expect("language must be seeded first")
            })
            .collect();
        let id = store.next_id();
        store.projects.push(StoredProject {
            id,
            name: name.to_string(),
            archived,
            base_language_id,
            language_ids,
            created_at: Utc::now(),
        });
        id
    }

    /// Seeds an identifier under a project, returning its id.
    pub fn seed_identifier(&self, project_id: i64, identifier: &str) -> i64 {
        let mut store = self.store.write().expect("store lock poisoned");
        let id = store.next_id();
        store.identifiers.push(StoredIdentifier {
            id,
            identifier: identifier.to_string(),
            project_id,
        });
        id
    }

    /// Seeds a translation for an identifier, returning its id.
    pub fn seed_translation(
        &self,
        identifier_id: i64,
        iso_code: &str,
        translation: &str,
        approved: bool,
    ) -> i64 {
        let mut store = self.store.write().expect("store lock poisoned");
        let language_id = store
            .languages
            .iter()
            .find(|l| l.iso_code == iso_code)
            .map(|l| l.id)
            .expect("language must be seeded first");
        let id = store.next_id();
        store.translations.push(StoredTranslation {
            id,
            translation: translation.to_string(),
            identifier_id,
            language_id,
            approved,
            improvement_needed: false,
        });
        id
    }

    /// Seeds a user with a pre-hashed password, returning its id.
    pub fn seed_user(&self, username: &str, password_hash: &str, mail: &str, is_admin: bool) -> i64 {
        let mut store = self.store.write().expect("store lock poisoned");
        let id = store.next_id();
        store.users.push(User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            mail: mail.to_string(),
            is_admin,
            created_at: Utc::now(),
        });
        id
    }
}

/// In-memory [`ProjectRepository`].
pub struct MemoryProjectRepository {
    store: Arc<RwLock<Store>>,
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn list(&self) -> Result<Vec<ProjectSummary>, AppError> {
        let store = self.store.read().expect("store lock poisoned");
        Ok(store.projects.iter().map(|p| store.summary(p)).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProjectDetail>, AppError> {
        let store = self.store.read().expect("store lock poisoned");
        Ok(store
            .projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| store.detail(p)))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, AppError> {
        let store = self.store.read().expect("store lock poisoned");
        Ok(store.projects.iter().find(|p| p.name == name).map(|p| Project {
            id: p.id,
            name: p.name.clone(),
            archived: p.archived,
            base_language_id: p.base_language_id,
            created_at: p.created_at,
        }))
    }

    async fn create(&self, new_project: NewProject) -> Result<ProjectDetail, AppError> {
        let mut store = self.store.write().expect("store lock poisoned");

        if store.projects.iter().any(|p| p.name == new_project.name) {
            return Err(AppError::conflict(
                "Project with same name already exists",
                json!({"name": new_project.name}),
            ));
        }

        let id = store.next_id();
        let project = StoredProject {
            id,
            name: new_project.name,
            archived: false,
            base_language_id: new_project.base_language_id,
            language_ids: vec![new_project.base_language_id],
            created_at: Utc::now(),
        };
        store.projects.push(project);
        let project = store.projects.last().expect("just pushed");
        Ok(store.detail(project))
    }

    async fn rename(&self, id: i64, name: &str) -> Result<bool, AppError> {
        let mut store = self.store.write().expect("store lock poisoned");

        if !store.projects.iter().any(|p| p.id == id) {
            return Ok(false);
        }
        if store.projects.iter().any(|p| p.id != id && p.name == name) {
            return Err(AppError::conflict(
                "Project with same name already exists",
                json!({"name": name}),
            ));
        }

        let project = store
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .expect("checked above");
        project.name = name.to_string();
        Ok(true)
    }

    async fn set_archived(&self, id: i64, archived: bool) -> Result<bool, AppError> {
        let mut store = self.store.write().expect("store lock poisoned");
        match store.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.archived = archived;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_language(&self, project_id: i64, language_id: i64) -> Result<(), AppError> {
        let mut store = self.store.write().expect("store lock poisoned");
        let project = store
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| AppError::internal("Project row missing", json!({"id": project_id})))?;

        if project.language_ids.contains(&language_id) {
            return Err(AppError::conflict(
                "Project already contains language",
                json!({"languageId": language_id}),
            ));
        }

        project.language_ids.push(language_id);
        Ok(())
    }

    async fn set_base_language(
        &self,
        project_id: i64,
        language_id: i64,
    ) -> Result<bool, AppError> {
        let mut store = self.store.write().expect("store lock poisoned");
        let Some(project) = store.projects.iter_mut().find(|p| p.id == project_id) else {
            return Ok(false);
        };

        project.base_language_id = language_id;
        if !project.language_ids.contains(&language_id) {
            project.language_ids.push(language_id);
        }
        Ok(true)
    }
}

/// In-memory [`LanguageRepository`].
pub struct MemoryLanguageRepository {
    store: Arc<RwLock<Store>>,
}

#[async_trait]
impl LanguageRepository for MemoryLanguageRepository {
    async fn list(&self) -> Result<Vec<Language>, AppError> {
        let store = self.store.read().expect("store lock poisoned");
        let mut languages = store.languages.clone();
        languages.sort_by(|a, b| a.iso_code.cmp(&b.iso_code));
        Ok(languages)
    }

    async fn find_by_iso_code(&self, iso_code: &str) -> Result<Option<Language>, AppError> {
        let store = self.store.read().expect("store lock poisoned");
        Ok(store
            .languages
            .iter()
            .find(|l| l.iso_code == iso_code)
            .cloned())
    }

    async fn create(&self, new_language: NewLanguage) -> Result<Language, AppError> {
        let mut store = self.store.write().expect("store lock poisoned");

        if store
            .languages
            .iter()
            .any(|l| l.iso_code == new_language.iso_code)
        {
            return Err(AppError::conflict(
                "Language already exists",
                json!({"isoCode": new_language.iso_code}),
            ));
        }

        let id = store.next_id();
        let language = Language {
            id,
            iso_code: new_language.iso_code,
            name: new_language.name,
        };
        store.languages.push(language.clone());
        Ok(language)
    }
}

/// In-memory [`UserRepository`].
pub struct MemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let store = self.store.read().expect("store lock poisoned");
        Ok(store
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.store.write().expect("store lock poisoned");

        if store.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::conflict(
                "User already exists",
                json!({"username": new_user.username}),
            ));
        }

        let id = store.next_id();
        let user = User {
            id,
            username: new_user.username,
            password_hash: new_user.password_hash,
            mail: new_user.mail,
            is_admin: new_user.is_admin,
            created_at: Utc::now(),
        };
        store.users.push(user.clone());
        Ok(user)
    }
}
