#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum_test::{TestServer, TestServerConfig};
use serde_json::json;

use translation_api::api::middleware::auth;
use translation_api::api::routes::{protected_routes, public_routes};
use translation_api::application::services::auth_service::hash_password;
use translation_api::application::services::{AuthService, ProjectService};
use translation_api::infrastructure::persistence::MemoryDb;
use translation_api::state::AppState;

pub const TEST_PASSWORD: &str = "password";

/// Builds an [`AppState`] over a fresh in-memory store, returning the
/// store handle for seeding.
pub fn create_test_state() -> (AppState, MemoryDb) {
    let db = MemoryDb::new();

    let project_service = Arc::new(ProjectService::new(
        Arc::new(db.projects()),
        Arc::new(db.languages()),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(db.users()),
        "test-signing-secret".to_string(),
        3600,
    ));

    let state = AppState {
        project_service,
        auth_service,
    };

    (state, db)
}

/// Seeds the standard fixture: three languages, three projects with
/// identifiers and translations, one admin and one regular user.
pub fn seed_fixture(db: &MemoryDb) {
    db.seed_language("en", "English");
    db.seed_language("de", "German");
    db.seed_language("es", "Spanish");

    let shared = db.seed_project("Shared", "en", &["de", "en"], false);
    let base = db.seed_project("Base", "de", &["de"], false);
    db.seed_project("Archived", "de", &[], true);

    let key1 = db.seed_identifier(shared, "key1");
    let key2 = db.seed_identifier(shared, "key2");
    let key2_base = db.seed_identifier(base, "key2");

    db.seed_translation(key1, "de", "translation1", false);
    db.seed_translation(key2, "de", "\"translation2\"", false);
    db.seed_translation(key2_base, "de", "translation2", true);

    let hash = hash_password(TEST_PASSWORD).unwrap();
    db.seed_user("admin1", &hash, "admin1@example.com", true);
    db.seed_user("user1", &hash, "user1@example.com", false);
}

/// Builds a test server over the full route table, session middleware
/// included. The server keeps cookies between requests so a login call
/// authenticates everything after it.
pub fn make_server(state: AppState) -> TestServer {
    let protected =
        protected_routes().route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .merge(public_routes())
        .merge(protected)
        .with_state(state);

    let config = TestServerConfig {
        save_cookies: true,
        ..Default::default()
    };
    TestServer::new_with_config(app, config).unwrap()
}

/// Builds a seeded server in one step.
pub fn make_seeded_server() -> TestServer {
    let (state, db) = create_test_state();
    seed_fixture(&db);
    make_server(state)
}

/// Logs the given user in; the session cookie sticks to the server.
pub async fn login(server: &TestServer, username: &str) {
    let response = server
        .post("/login")
        .json(&json!({ "loginName": username, "password": TEST_PASSWORD }))
        .await;
    response.assert_status_ok();
}

/// Looks up a project id by name via the listing endpoints.
pub async fn project_id_by_name(server: &TestServer, name: &str) -> i64 {
    for path in ["/projects/active", "/projects/archived"] {
        let json = server.get(path).await.json::<serde_json::Value>();
        if let Some(project) = json
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == name)
        {
            return project["id"].as_i64().unwrap();
        }
    }
    panic!("project {name} not found in either listing");
}
