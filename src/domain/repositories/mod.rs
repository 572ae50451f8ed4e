//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for unit tests.

pub mod language_repository;
pub mod project_repository;
pub mod user_repository;

pub use language_repository::LanguageRepository;
pub use project_repository::ProjectRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use language_repository::MockLanguageRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
