//! Repository implementations.
//!
//! # PostgreSQL
//!
//! - [`PgProjectRepository`] - projects, language sets, identifiers
//! - [`PgLanguageRepository`] - language reference data
//! - [`PgUserRepository`] - user accounts
//!
//! # In-memory
//!
//! [`MemoryDb`] hands out implementations of the same traits backed by a
//! shared in-process store; integration tests run the full HTTP stack
//! against it.

pub mod memory;
pub mod pg_language_repository;
pub mod pg_project_repository;
pub mod pg_user_repository;

pub use memory::{MemoryDb, MemoryLanguageRepository, MemoryProjectRepository, MemoryUserRepository};
pub use pg_language_repository::PgLanguageRepository;
pub use pg_project_repository::PgProjectRepository;
pub use pg_user_repository::PgUserRepository;
