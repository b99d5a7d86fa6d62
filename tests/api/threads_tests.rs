//! `/threads` endpoint tests

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_fail, TestApp};

#[tokio::test]
async fn test_add_thread() {
    let app = TestApp::new();
    let (user_id, token) = app.login_as("dicoding").await;

    let response = app
        .post_json_auth(
            "/threads",
            json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
            &token,
        )
        .await;

    assert_eq!(response.status, 201);
    let added_thread = &response.body["data"]["addedThread"];
    assert!(added_thread["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added_thread["title"], "sebuah thread");
    assert_eq!(added_thread["owner"], user_id.as_str());
}

#[tokio::test]
async fn test_add_thread_requires_authentication() {
    let app = TestApp::new();

    let missing = app
        .post_json("/threads", json!({ "title": "t", "body": "b" }))
        .await;
    let invalid = app
        .post_json_auth("/threads", json!({ "title": "t", "body": "b" }), "not-a-token")
        .await;

    assert_eq!(missing.status, 401);
    assert_eq!(missing.body["status"], "fail");
    assert_eq!(invalid.status, 401);
}

#[tokio::test]
async fn test_add_thread_payload_validation() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;

    let missing = app
        .post_json_auth("/threads", json!({ "title": "sebuah thread" }), &token)
        .await;
    let wrong_type = app
        .post_json_auth("/threads", json!({ "title": 123, "body": true }), &token)
        .await;

    assert_fail(
        &missing,
        400,
        "tidak dapat membuat thread karena properti yang dibutuhkan tidak ada",
    );
    assert_fail(
        &wrong_type,
        400,
        "tidak dapat membuat thread karena tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_owner_comes_from_token_not_body() {
    let app = TestApp::new();
    let (user_id, token) = app.login_as("dicoding").await;

    let response = app
        .post_json_auth(
            "/threads",
            json!({ "title": "t", "body": "b", "owner": "user-someone-else" }),
            &token,
        )
        .await;

    assert_eq!(response.body["data"]["addedThread"]["owner"], user_id.as_str());
}

#[tokio::test]
async fn test_get_missing_thread() {
    let app = TestApp::new();

    let response = app.get("/threads/thread-404").await;

    assert_fail(&response, 404, "Thread tidak ditemukan");
}

#[tokio::test]
async fn test_get_thread_detail_masks_deleted_content() {
    let app = TestApp::new();
    let (_, owner_token) = app.login_as("dicoding").await;
    let (_, other_token) = app.login_as("johndoe").await;
    let thread_id = app.add_thread(&owner_token).await;
    let first_comment = app.add_comment(&thread_id, &owner_token).await;
    let second_comment = app.add_comment(&thread_id, &other_token).await;
    let kept_reply = app.add_reply(&thread_id, &first_comment, &other_token).await;
    let deleted_reply = app.add_reply(&thread_id, &first_comment, &owner_token).await;

    app.delete_auth(
        &format!(
            "/threads/{}/comments/{}/replies/{}",
            thread_id, first_comment, deleted_reply
        ),
        &owner_token,
    )
    .await;
    app.delete_auth(
        &format!("/threads/{}/comments/{}", thread_id, second_comment),
        &other_token,
    )
    .await;
    app.put_auth(
        &format!("/threads/{}/comments/{}/likes", thread_id, first_comment),
        &other_token,
    )
    .await;

    let response = app.get(&format!("/threads/{}", thread_id)).await;

    assert_eq!(response.status, 200);
    let thread = &response.body["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "dicoding");
    assert!(thread["date"].is_string());

    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);

    assert_eq!(comments[0]["id"], first_comment.as_str());
    assert_eq!(comments[0]["username"], "dicoding");
    assert_eq!(comments[0]["content"], "sebuah comment");
    assert_eq!(comments[0]["likeCount"], 1);
    assert!(comments[0].get("isDeleted").is_none());

    let replies = comments[0]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["id"], kept_reply.as_str());
    assert_eq!(replies[0]["content"], "sebuah balasan");
    assert_eq!(replies[0]["username"], "johndoe");
    assert_eq!(replies[1]["id"], deleted_reply.as_str());
    assert_eq!(replies[1]["content"], "**balasan telah dihapus**");
    assert_eq!(replies[1]["username"], "dicoding");

    assert_eq!(comments[1]["id"], second_comment.as_str());
    assert_eq!(comments[1]["username"], "johndoe");
    assert_eq!(comments[1]["content"], "**komentar telah dihapus**");
    assert_eq!(comments[1]["likeCount"], 0);
    assert_eq!(comments[1]["replies"], json!([]));
}
