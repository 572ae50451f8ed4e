//! CLI administration tool for translation-api.
//!
//! Covers the out-of-band maintenance the HTTP surface deliberately does
//! not expose: language reference data and bootstrap user accounts.
//!
//! # Usage
//!
//! ```bash
//! # Seed a language
//! cargo run --bin admin -- language add --iso-code en --name English
//!
//! # List languages
//! cargo run --bin admin -- language list
//!
//! # Create a user (interactive)
//! cargo run --bin admin -- user create
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;

use translation_api::application::services::auth_service::hash_password;
use translation_api::domain::entities::{NewLanguage, NewUser};
use translation_api::domain::repositories::{LanguageRepository, UserRepository};
use translation_api::infrastructure::persistence::{PgLanguageRepository, PgUserRepository};

/// CLI tool for managing translation-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage language reference data
    Language {
        #[command(subcommand)]
        action: LanguageAction,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Language management subcommands.
#[derive(Subcommand)]
enum LanguageAction {
    /// Add a new language
    Add {
        /// ISO code, e.g. "en"
        #[arg(long)]
        iso_code: String,

        /// Display name, e.g. "English"
        #[arg(long)]
        name: String,
    },

    /// List all languages
    List,
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user (interactive)
    Create,
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = Arc::new(
        PgPool::connect(&database_url)
            .await
            .context("Failed to connect to database")?,
    );

    match cli.command {
        Commands::Language { action } => match action {
            LanguageAction::Add { iso_code, name } => add_language(pool, iso_code, name).await,
            LanguageAction::List => list_languages(pool).await,
        },
        Commands::User { action } => match action {
            UserAction::Create => create_user(pool).await,
        },
        Commands::Db { action } => match action {
            DbAction::Check => db_check(pool).await,
        },
    }
}

async fn add_language(pool: Arc<PgPool>, iso_code: String, name: String) -> Result<()> {
    let repo = PgLanguageRepository::new(pool);
    let language = repo.create(NewLanguage { iso_code, name }).await?;

    println!(
        "{} language {} ({})",
        "Created".green().bold(),
        language.name.bold(),
        language.iso_code
    );
    Ok(())
}

async fn list_languages(pool: Arc<PgPool>) -> Result<()> {
    let repo = PgLanguageRepository::new(pool);
    let languages = repo.list().await?;

    if languages.is_empty() {
        println!("{}", "No languages configured yet.".yellow());
        return Ok(());
    }

    println!("{}", "Languages:".bold());
    for language in languages {
        println!("  {:<6} {}", language.iso_code.cyan(), language.name);
    }
    Ok(())
}

async fn create_user(pool: Arc<PgPool>) -> Result<()> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let mail: String = Input::new().with_prompt("Mail").interact_text()?;
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;
    let is_admin = Confirm::new()
        .with_prompt("Grant admin privileges?")
        .default(false)
        .interact()?;

    let password_hash = hash_password(&password)?;

    let repo = PgUserRepository::new(pool);
    let user = repo
        .create(NewUser {
            username,
            password_hash,
            mail,
            is_admin,
        })
        .await?;

    let role = if user.is_admin { "admin" } else { "user" };
    println!(
        "{} {} {} (id {})",
        "Created".green().bold(),
        role,
        user.username.bold(),
        user.id
    );
    Ok(())
}

async fn db_check(pool: Arc<PgPool>) -> Result<()> {
    let languages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM languages")
        .fetch_one(pool.as_ref())
        .await?;
    let projects: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool.as_ref())
        .await?;
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool.as_ref())
        .await?;

    println!("{}", "Database connection OK".green().bold());
    println!("  languages: {languages}");
    println!("  projects:  {projects}");
    println!("  users:     {users}");
    Ok(())
}
