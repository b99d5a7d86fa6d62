//! `/threads/{threadId}/comments` endpoint tests

use serde_json::json;

use crate::common::{assert_fail, TestApp};

#[tokio::test]
async fn test_add_comment() {
    let app = TestApp::new();
    let (user_id, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments", thread_id),
            json!({ "content": "sebuah comment" }),
            &token,
        )
        .await;

    assert_eq!(response.status, 201);
    let added_comment = &response.body["data"]["addedComment"];
    assert!(added_comment["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added_comment["content"], "sebuah comment");
    assert_eq!(added_comment["owner"], user_id.as_str());
}

#[tokio::test]
async fn test_add_comment_ignores_client_date_and_deleted_flag() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let uri = format!("/threads/{}/comments", thread_id);

    let response = app
        .post_json_auth(
            &uri,
            json!({
                "content": "sebuah comment",
                "isDeleted": true,
                "date": "2000-01-01T00:00:00Z",
            }),
            &token,
        )
        .await;
    let unparsable_date = app
        .post_json_auth(
            &uri,
            json!({ "content": "sebuah comment", "date": "kemarin" }),
            &token,
        )
        .await;

    assert_eq!(response.status, 201);
    assert_eq!(unparsable_date.status, 201);
    let comment_id = response.body["data"]["addedComment"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(!app.forum.is_comment_deleted(&comment_id));

    let detail = app.get(&format!("/threads/{}", thread_id)).await;
    let comments = detail.body["data"]["thread"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], comment_id.as_str());
    assert_eq!(comments[0]["content"], "sebuah comment");
    assert!(!comments[0]["date"].as_str().unwrap().starts_with("2000-01-01"));
}

#[tokio::test]
async fn test_add_comment_to_missing_thread() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;

    let response = app
        .post_json_auth(
            "/threads/thread-404/comments",
            json!({ "content": "sebuah comment" }),
            &token,
        )
        .await;

    assert_fail(&response, 404, "Thread tidak ditemukan");
}

#[tokio::test]
async fn test_add_comment_payload_validation() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let uri = format!("/threads/{}/comments", thread_id);

    let missing = app.post_json_auth(&uri, json!({}), &token).await;
    let wrong_type = app
        .post_json_auth(&uri, json!({ "content": 123 }), &token)
        .await;

    assert_fail(
        &missing,
        400,
        "tidak dapat menambahkan komentar karena properti yang dibutuhkan tidak ada",
    );
    assert_fail(
        &wrong_type,
        400,
        "tidak dapat menambahkan komentar karena tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_add_comment_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/threads/thread-123/comments",
            json!({ "content": "sebuah comment" }),
        )
        .await;

    assert_eq!(response.status, 401);
}

#[tokio::test]
async fn test_delete_comment_by_owner() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&thread_id, &token).await;
    let uri = format!("/threads/{}/comments/{}", thread_id, comment_id);

    let response = app.delete_auth(&uri, &token).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "status": "success" }));
    assert!(app.forum.is_comment_deleted(&comment_id));

    let again = app.delete_auth(&uri, &token).await;
    assert_eq!(again.status, 200);
    assert!(app.forum.is_comment_deleted(&comment_id));
}

#[tokio::test]
async fn test_delete_comment_by_non_owner() {
    let app = TestApp::new();
    let (_, owner_token) = app.login_as("dicoding").await;
    let (_, other_token) = app.login_as("johndoe").await;
    let thread_id = app.add_thread(&owner_token).await;
    let comment_id = app.add_comment(&thread_id, &owner_token).await;

    let response = app
        .delete_auth(
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            &other_token,
        )
        .await;

    assert_eq!(response.status, 403);
    assert_eq!(response.body["status"], "fail");
    assert!(!app.forum.is_comment_deleted(&comment_id));
}

#[tokio::test]
async fn test_delete_missing_comment_or_thread() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let missing_thread = app
        .delete_auth("/threads/thread-404/comments/comment-123", &token)
        .await;
    let missing_comment = app
        .delete_auth(&format!("/threads/{}/comments/comment-404", thread_id), &token)
        .await;

    assert_fail(&missing_thread, 404, "Thread tidak ditemukan");
    assert_eq!(missing_comment.status, 404);
}
