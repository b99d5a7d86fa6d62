//! `/authentications` endpoint tests

use forum_api::application::security::AuthenticationTokenManager;
use serde_json::json;

use crate::common::{assert_fail, TestApp, TEST_PASSWORD};

async fn login(app: &TestApp) -> (String, String) {
    app.register("dicoding").await;
    let response = app
        .post_json(
            "/authentications",
            json!({ "username": "dicoding", "password": TEST_PASSWORD }),
        )
        .await;
    assert_eq!(response.status, 201);

    let data = &response.body["data"];
    (
        data["accessToken"].as_str().unwrap().to_string(),
        data["refreshToken"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn test_login_issues_token_pair() {
    let app = TestApp::new();

    let (access_token, refresh_token) = login(&app).await;

    assert!(!access_token.is_empty());
    assert!(!refresh_token.is_empty());
    assert_eq!(app.forum.stored_token_count(), 1);
}

#[tokio::test]
async fn test_login_with_unknown_username() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/authentications",
            json!({ "username": "nobody", "password": "secret" }),
        )
        .await;

    assert_fail(&response, 400, "username tidak ditemukan");
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = TestApp::new();
    app.register("dicoding").await;

    let response = app
        .post_json(
            "/authentications",
            json!({ "username": "dicoding", "password": "wrong_password" }),
        )
        .await;

    assert_fail(&response, 401, "kredensial yang Anda masukkan salah");
    assert_eq!(app.forum.stored_token_count(), 0);
}

#[tokio::test]
async fn test_login_payload_validation() {
    let app = TestApp::new();

    let missing = app
        .post_json("/authentications", json!({ "username": "dicoding" }))
        .await;
    let wrong_type = app
        .post_json(
            "/authentications",
            json!({ "username": 123, "password": "secret" }),
        )
        .await;

    assert_fail(&missing, 400, "harus mengirimkan username dan password");
    assert_fail(&wrong_type, 400, "username dan password harus string");
}

#[tokio::test]
async fn test_refresh_access_token() {
    let app = TestApp::new();
    let (_, refresh_token) = login(&app).await;

    let response = app
        .put_json("/authentications", json!({ "refreshToken": refresh_token }))
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["status"], "success");
    let access_token = response.body["data"]["accessToken"].as_str().unwrap();
    let payload = app
        .token_manager
        .decode_access_token(access_token)
        .unwrap();
    assert_eq!(payload.username, "dicoding");
}

#[tokio::test]
async fn test_refresh_rejects_invalid_and_unknown_tokens() {
    let app = TestApp::new();
    let (access_token, _) = login(&app).await;

    let invalid = app
        .put_json("/authentications", json!({ "refreshToken": "xxx" }))
        .await;
    // Signed with the access key, so never valid as a refresh token.
    let wrong_key = app
        .put_json("/authentications", json!({ "refreshToken": access_token }))
        .await;

    assert_fail(&invalid, 400, "refresh token tidak valid");
    assert_fail(&wrong_key, 400, "refresh token tidak valid");
}

#[tokio::test]
async fn test_refresh_payload_validation() {
    let app = TestApp::new();

    let missing = app.put_json("/authentications", json!({})).await;
    let wrong_type = app
        .put_json("/authentications", json!({ "refreshToken": 123 }))
        .await;

    assert_fail(&missing, 400, "harus mengirimkan token refresh");
    assert_fail(&wrong_type, 400, "refresh token harus string");
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let app = TestApp::new();
    let (_, refresh_token) = login(&app).await;

    let response = app
        .delete_json("/authentications", json!({ "refreshToken": refresh_token }))
        .await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "status": "success" }));
    assert_eq!(app.forum.stored_token_count(), 0);

    let refreshed = app
        .put_json("/authentications", json!({ "refreshToken": refresh_token }))
        .await;
    assert_fail(&refreshed, 400, "refresh token tidak ditemukan di database");

    let again = app
        .delete_json("/authentications", json!({ "refreshToken": refresh_token }))
        .await;
    assert_fail(&again, 400, "refresh token tidak ditemukan di database");
}

#[tokio::test]
async fn test_logout_without_body() {
    let app = TestApp::new();

    let response = app.request("DELETE", "/authentications", None, None).await;

    assert_fail(&response, 400, "harus mengirimkan token refresh");
}
