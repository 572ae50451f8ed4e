mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_active_listing_excludes_archived() {
    let server = common::make_seeded_server();

    let response = server.get("/projects/active").await;
    response.assert_status_ok();

    let projects = response.json::<Value>();
    let names: Vec<&str> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Shared", "Base"]);
}

#[tokio::test]
async fn test_archived_listing_includes_only_archived() {
    let server = common::make_seeded_server();

    let response = server.get("/projects/archived").await;
    response.assert_status_ok();

    let projects = response.json::<Value>();
    let items = projects.as_array().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Archived");
}

#[tokio::test]
async fn test_listing_language_set_is_never_null() {
    let server = common::make_seeded_server();

    let response = server.get("/projects/archived").await;
    response.assert_status_ok();

    let projects = response.json::<Value>();
    let archived = &projects.as_array().unwrap()[0];

    // The archived project has no languages attached; the DTO still
    // carries an empty array, not null.
    assert!(archived["languages"].is_array());
    assert_eq!(archived["languages"].as_array().unwrap().len(), 0);
    assert_eq!(archived["base_language"]["iso_code"], "de");
}

#[tokio::test]
async fn test_archived_listing_eager_loads_like_active() {
    let server = common::make_seeded_server();

    let active = server.get("/projects/active").await.json::<Value>();
    let archived = server.get("/projects/archived").await.json::<Value>();

    for project in active
        .as_array()
        .unwrap()
        .iter()
        .chain(archived.as_array().unwrap())
    {
        assert!(project["base_language"]["iso_code"].is_string());
        assert!(project["languages"].is_array());
    }
}

// ─── DETAIL ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_project_full_shape() {
    let server = common::make_seeded_server();
    let id = common::project_id_by_name(&server, "Shared").await;

    let response = server.get(&format!("/projects/{id}")).await;
    response.assert_status_ok();

    let project = response.json::<Value>();
    assert_eq!(project["name"], "Shared");
    assert_eq!(project["archived"], false);
    assert_eq!(project["base_language"]["iso_code"], "en");

    let languages: Vec<&str> = project["languages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["iso_code"].as_str().unwrap())
        .collect();
    assert_eq!(languages, vec!["de", "en"]);

    let identifiers = project["identifiers"].as_array().unwrap();
    assert_eq!(identifiers.len(), 2);
    assert_eq!(identifiers[0]["identifier"], "key1");

    let translations = identifiers[0]["translations"].as_array().unwrap();
    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0]["translation"], "translation1");
    assert_eq!(translations[0]["language"], "de");
    assert_eq!(translations[0]["approved"], false);
    assert_eq!(translations[0]["improvement_needed"], false);
}

#[tokio::test]
async fn test_get_project_translation_approval_survives_mapping() {
    let server = common::make_seeded_server();
    let id = common::project_id_by_name(&server, "Base").await;

    let project = server.get(&format!("/projects/{id}")).await.json::<Value>();
    let identifiers = project["identifiers"].as_array().unwrap();

    assert_eq!(identifiers.len(), 1);
    let translations = identifiers[0]["translations"].as_array().unwrap();
    assert_eq!(translations[0]["approved"], true);
}

#[tokio::test]
async fn test_get_project_not_found() {
    let server = common::make_seeded_server();

    let response = server.get("/projects/999999").await;
    response.assert_status_not_found();
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_project_success() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Fresh", "baseLanguageCode": "en" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let project = response.json::<Value>();
    assert_eq!(project["name"], "Fresh");
    assert_eq!(project["archived"], false);
    assert_eq!(project["base_language"]["iso_code"], "en");

    let languages = project["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0]["iso_code"], "en");
    assert!(project["identifiers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_project_requires_session() {
    let server = common::make_seeded_server();

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Fresh", "baseLanguageCode": "en" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_project_missing_fields() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Fresh" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/projects")
        .json(&json!({ "baseLanguageCode": "en" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/projects")
        .json(&json!({ "name": "", "baseLanguageCode": "en" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_project_duplicate_name_conflicts() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Shared", "baseLanguageCode": "en" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_project_duplicate_name_wins_over_unknown_code() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    // Duplicate name and unknown language code together: the conflict is
    // reported, not the missing language.
    let response = server
        .post("/projects")
        .json(&json!({ "name": "Shared", "baseLanguageCode": "zz" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_project_unknown_language_persists_nothing() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/projects")
        .json(&json!({ "name": "Fresh", "baseLanguageCode": "zz" }))
        .await;
    response.assert_status_not_found();

    let active = server.get("/projects/active").await.json::<Value>();
    assert!(
        active
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["name"] != "Fresh")
    );
}

// ─── RENAME ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rename_project_success() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .post(&format!("/projects/{id}/rename"))
        .json(&json!({ "name": "Renamed" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Renamed");
}

#[tokio::test]
async fn test_rename_project_accepts_patch() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .patch(&format!("/projects/{id}/rename"))
        .json(&json!({ "name": "Patched" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Patched");
}

#[tokio::test]
async fn test_rename_project_missing_name() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .post(&format!("/projects/{id}/rename"))
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_project_to_taken_name_conflicts() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .post(&format!("/projects/{id}/rename"))
        .json(&json!({ "name": "Shared" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_rename_project_not_found() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/projects/999999/rename")
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status_not_found();
}

// ─── ARCHIVE ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_archive_project_is_idempotent() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    for _ in 0..2 {
        let response = server.post(&format!("/projects/{id}/archive")).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["archived"], true);
    }

    let active = server.get("/projects/active").await.json::<Value>();
    assert!(active.as_array().unwrap().iter().all(|p| p["name"] != "Base"));

    let archived = server.get("/projects/archived").await.json::<Value>();
    assert!(
        archived
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p["name"] == "Base")
    );
}

#[tokio::test]
async fn test_archive_project_not_found() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server.post("/projects/999999/archive").await;
    response.assert_status_not_found();
}

// ─── ADD LANGUAGE ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_language_appends_once_then_conflicts() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .post(&format!("/projects/{id}/languages"))
        .json(&json!({ "languageCode": "en" }))
        .await;
    response.assert_status_ok();

    let languages: Vec<String> = response.json::<Value>()["languages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["iso_code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(languages, vec!["de", "en"]);

    // Second attach of the same code conflicts and changes nothing.
    let response = server
        .post(&format!("/projects/{id}/languages"))
        .json(&json!({ "languageCode": "en" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let project = server.get(&format!("/projects/{id}")).await.json::<Value>();
    assert_eq!(project["languages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_add_language_unknown_code() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .post(&format!("/projects/{id}/languages"))
        .json(&json!({ "languageCode": "zz" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_add_language_unknown_project() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/projects/999999/languages")
        .json(&json!({ "languageCode": "en" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_add_language_missing_code() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .post(&format!("/projects/{id}/languages"))
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── SET BASE LANGUAGE ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_set_base_language_appends_missing_member() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .post(&format!("/projects/{id}/baseLanguage"))
        .json(&json!({ "languageCode": "es" }))
        .await;
    response.assert_status_ok();

    let project = response.json::<Value>();
    assert_eq!(project["base_language"]["iso_code"], "es");

    let languages: Vec<&str> = project["languages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["iso_code"].as_str().unwrap())
        .collect();
    assert_eq!(languages.iter().filter(|&&l| l == "es").count(), 1);
    assert!(languages.contains(&"de"));
}

#[tokio::test]
async fn test_set_base_language_existing_member_not_duplicated() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Shared").await;

    // "de" is already attached; switching the base to it must not grow
    // the language set.
    let response = server
        .post(&format!("/projects/{id}/baseLanguage"))
        .json(&json!({ "languageCode": "de" }))
        .await;
    response.assert_status_ok();

    let project = response.json::<Value>();
    assert_eq!(project["base_language"]["iso_code"], "de");
    assert_eq!(project["languages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_set_base_language_unknown_code() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;
    let id = common::project_id_by_name(&server, "Base").await;

    let response = server
        .post(&format!("/projects/{id}/baseLanguage"))
        .json(&json!({ "languageCode": "zz" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_set_base_language_unknown_project() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/projects/999999/baseLanguage")
        .json(&json!({ "languageCode": "en" }))
        .await;

    response.assert_status_not_found();
}

// ─── END TO END ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_project_lifecycle() {
    let (state, db) = common::create_test_state();
    db.seed_language("de", "German");
    db.seed_language("en", "English");
    let hash = translation_api::application::services::auth_service::hash_password(
        common::TEST_PASSWORD,
    )
    .unwrap();
    db.seed_user("admin1", &hash, "admin1@example.com", true);
    let server = common::make_server(state);
    common::login(&server, "admin1").await;

    // Create with base "de".
    let response = server
        .post("/projects")
        .json(&json!({ "name": "Lifecycle", "baseLanguageCode": "de" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let project = response.json::<Value>();
    let id = project["id"].as_i64().unwrap();
    assert_eq!(project["languages"].as_array().unwrap().len(), 1);

    // Attach "en".
    let response = server
        .post(&format!("/projects/{id}/languages"))
        .json(&json!({ "languageCode": "en" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["languages"].as_array().unwrap().len(),
        2
    );

    // Switch the base to "en"; both languages stay attached exactly once.
    let response = server
        .post(&format!("/projects/{id}/baseLanguage"))
        .json(&json!({ "languageCode": "en" }))
        .await;
    response.assert_status_ok();
    let project = response.json::<Value>();
    assert_eq!(project["base_language"]["iso_code"], "en");
    let languages: Vec<&str> = project["languages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["iso_code"].as_str().unwrap())
        .collect();
    assert_eq!(languages.iter().filter(|&&l| l == "de").count(), 1);
    assert_eq!(languages.iter().filter(|&&l| l == "en").count(), 1);

    // Archive and verify the listings flip.
    let response = server.post(&format!("/projects/{id}/archive")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["archived"], true);

    let active = server.get("/projects/active").await.json::<Value>();
    assert!(active.as_array().unwrap().is_empty());

    let archived = server.get("/projects/archived").await.json::<Value>();
    assert_eq!(archived.as_array().unwrap().len(), 1);
    assert_eq!(archived.as_array().unwrap()[0]["name"], "Lifecycle");
}
