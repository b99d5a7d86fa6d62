//! `/users` endpoint tests

use serde_json::json;
use test_case::test_case;

use crate::common::{assert_fail, TestApp};

#[tokio::test]
async fn test_register_user() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/users",
            json!({
                "username": "dicoding",
                "password": "secret",
                "fullname": "Dicoding Indonesia",
            }),
        )
        .await;

    assert_eq!(response.status, 201);
    assert_eq!(response.body["status"], "success");
    let added_user = &response.body["data"]["addedUser"];
    assert!(added_user["id"].as_str().unwrap().starts_with("user-"));
    assert_eq!(added_user["username"], "dicoding");
    assert_eq!(added_user["fullname"], "Dicoding Indonesia");
    assert!(added_user.get("password").is_none());
}

#[test_case(json!({ "fullname": "Dicoding Indonesia", "password": "secret" }), "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada" ; "missing username")]
#[test_case(json!({ "username": "dicoding", "password": "secret", "fullname": ["Dicoding"] }), "tidak dapat membuat user baru karena tipe data tidak sesuai" ; "wrong type")]
#[test_case(json!({ "username": "dicodingindonesiadicodingindonesiadicodingindonesiadicoding", "password": "secret", "fullname": "Dicoding Indonesia" }), "tidak dapat membuat user baru karena karakter username melebihi batas limit" ; "username too long")]
#[test_case(json!({ "username": "dicoding indonesia", "password": "secret", "fullname": "Dicoding Indonesia" }), "tidak dapat membuat user baru karena username mengandung karakter terlarang" ; "restricted character")]
#[tokio::test]
async fn test_register_rejects_bad_payload(payload: serde_json::Value, message: &str) {
    let app = TestApp::new();

    let response = app.post_json("/users", payload).await;

    assert_fail(&response, 400, message);
}

#[tokio::test]
async fn test_register_rejects_taken_username() {
    let app = TestApp::new();
    app.register("dicoding").await;

    let response = app
        .post_json(
            "/users",
            json!({ "username": "dicoding", "password": "other", "fullname": "Someone" }),
        )
        .await;

    assert_fail(&response, 400, "username tidak tersedia");
}

#[tokio::test]
async fn test_register_without_body() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/users", None, None)
        .await;

    assert_fail(
        &response,
        400,
        "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada",
    );
}
