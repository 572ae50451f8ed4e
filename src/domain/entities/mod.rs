//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Aggregate
//! views ([`ProjectSummary`], [`ProjectDetail`]) carry associated rows the
//! repositories load eagerly.
//!
//! Creation inputs follow the "New Type" pattern: `NewProject`,
//! `NewLanguage`, `NewUser` hold only the caller-supplied fields.

pub mod identifier;
pub mod language;
pub mod project;
pub mod translation;
pub mod user;

pub use identifier::{Identifier, IdentifierWithTranslations};
pub use language::{Language, NewLanguage};
pub use project::{NewProject, Project, ProjectDetail, ProjectSummary};
pub use translation::Translation;
pub use user::{NewUser, User};
