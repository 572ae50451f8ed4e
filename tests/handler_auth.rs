mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── LOGIN ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_sets_cookie() {
    let server = common::make_seeded_server();

    let response = server
        .post("/login")
        .json(&json!({ "loginName": "admin1", "password": common::TEST_PASSWORD }))
        .await;

    response.assert_status_ok();

    let user = response.json::<Value>();
    assert_eq!(user["username"], "admin1");
    assert_eq!(user["mail"], "admin1@example.com");
    assert_eq!(user["admin"], true);

    let cookie = response.header("set-cookie");
    let cookie = cookie.to_str().unwrap();
    assert!(cookie.starts_with("auth_token="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_regular_user() {
    let server = common::make_seeded_server();

    let response = server
        .post("/login")
        .json(&json!({ "loginName": "user1", "password": common::TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["admin"], false);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = common::make_seeded_server();

    let response = server
        .post("/login")
        .json(&json!({ "loginName": "nobody", "password": common::TEST_PASSWORD }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = common::make_seeded_server();

    let response = server
        .post("/login")
        .json(&json!({ "loginName": "admin1", "password": "wrong-password" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = common::make_seeded_server();

    let response = server
        .post("/login")
        .json(&json!({ "loginName": "admin1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/login")
        .json(&json!({ "password": common::TEST_PASSWORD }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── LOGOUT ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_logout_always_succeeds() {
    let server = common::make_seeded_server();

    // Without a session.
    server.get("/logout").await.assert_status_ok();

    // With a session; the cookie is expired afterwards.
    common::login(&server, "admin1").await;
    let response = server.get("/logout").await;
    response.assert_status_ok();

    let cookie = response.header("set-cookie");
    assert!(cookie.to_str().unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_logout_revokes_access() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    server.get("/logout").await.assert_status_ok();

    let response = server
        .post("/users")
        .json(&json!({ "name": "ghost", "password": "longenough", "mail": "g@example.com" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

// ─── CREATE USER ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_requires_session() {
    let server = common::make_seeded_server();

    let response = server
        .post("/users")
        .json(&json!({ "name": "newbie", "password": "longenough", "mail": "n@example.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_user_requires_admin() {
    let server = common::make_seeded_server();
    common::login(&server, "user1").await;

    let response = server
        .post("/users")
        .json(&json!({ "name": "newbie", "password": "longenough", "mail": "n@example.com" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_user_success() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/users")
        .json(&json!({ "name": "newbie", "password": "longenough", "mail": "n@example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let user = response.json::<Value>();
    assert_eq!(user["username"], "newbie");
    assert_eq!(user["mail"], "n@example.com");
    assert_eq!(user["admin"], false);

    // The fresh account can log in right away.
    let response = server
        .post("/login")
        .json(&json!({ "loginName": "newbie", "password": "longenough" }))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_create_admin_user() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/users")
        .json(&json!({
            "name": "admin2",
            "password": "longenough",
            "mail": "a2@example.com",
            "admin": true
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["admin"], true);
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    let response = server
        .post("/users")
        .json(&json!({ "name": "user1", "password": "longenough", "mail": "dup@example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_user_invalid_fields() {
    let server = common::make_seeded_server();
    common::login(&server, "admin1").await;

    // Short password.
    let response = server
        .post("/users")
        .json(&json!({ "name": "newbie", "password": "short", "mail": "n@example.com" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Malformed mail address.
    let response = server
        .post("/users")
        .json(&json!({ "name": "newbie", "password": "longenough", "mail": "not-a-mail" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Missing name.
    let response = server
        .post("/users")
        .json(&json!({ "password": "longenough", "mail": "n@example.com" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
