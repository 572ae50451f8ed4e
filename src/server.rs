//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{AuthService, ProjectService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgLanguageRepository, PgProjectRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or the server
/// bind fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let project_repository = Arc::new(PgProjectRepository::new(pool.clone()));
    let language_repository = Arc::new(PgLanguageRepository::new(pool.clone()));
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));

    let state = AppState {
        project_service: Arc::new(ProjectService::new(project_repository, language_repository)),
        auth_service: Arc::new(AuthService::new(
            user_repository,
            config.session_signing_secret,
            config.session_ttl_seconds,
        )),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
