//! `/threads/{threadId}/comments/{commentId}/replies` endpoint tests

use serde_json::json;

use crate::common::{assert_fail, TestApp};

#[tokio::test]
async fn test_add_reply() {
    let app = TestApp::new();
    let (user_id, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&thread_id, &token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments/{}/replies", thread_id, comment_id),
            json!({ "content": "sebuah balasan" }),
            &token,
        )
        .await;

    assert_eq!(response.status, 201);
    let added_reply = &response.body["data"]["addedReply"];
    assert!(added_reply["id"].as_str().unwrap().starts_with("reply-"));
    assert_eq!(added_reply["content"], "sebuah balasan");
    assert_eq!(added_reply["owner"], user_id.as_str());
}

#[tokio::test]
async fn test_add_reply_ignores_client_date_and_deleted_flag() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&thread_id, &token).await;
    let uri = format!("/threads/{}/comments/{}/replies", thread_id, comment_id);

    let response = app
        .post_json_auth(
            &uri,
            json!({
                "content": "sebuah balasan",
                "isDeleted": true,
                "date": "2000-01-01T00:00:00Z",
            }),
            &token,
        )
        .await;
    let unparsable_date = app
        .post_json_auth(
            &uri,
            json!({ "content": "sebuah balasan", "date": "kemarin" }),
            &token,
        )
        .await;

    assert_eq!(response.status, 201);
    assert_eq!(unparsable_date.status, 201);
    let reply_id = response.body["data"]["addedReply"]["id"].as_str().unwrap();

    let detail = app.get(&format!("/threads/{}", thread_id)).await;
    let replies = detail.body["data"]["thread"]["comments"][0]["replies"]
        .as_array()
        .unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["id"], reply_id);
    assert_eq!(replies[0]["content"], "sebuah balasan");
    assert!(!replies[0]["date"].as_str().unwrap().starts_with("2000-01-01"));
}

#[tokio::test]
async fn test_add_reply_to_missing_comment() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments/comment-404/replies", thread_id),
            json!({ "content": "sebuah balasan" }),
            &token,
        )
        .await;

    assert_fail(&response, 404, "Komentar tidak ditemukan");
}

#[tokio::test]
async fn test_add_reply_payload_validation() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&thread_id, &token).await;
    let uri = format!("/threads/{}/comments/{}/replies", thread_id, comment_id);

    let missing = app.post_json_auth(&uri, json!({}), &token).await;
    let wrong_type = app
        .post_json_auth(&uri, json!({ "content": ["sebuah balasan"] }), &token)
        .await;

    assert_fail(
        &missing,
        400,
        "tidak dapat menambahkan balasan karena properti yang dibutuhkan tidak ada",
    );
    assert_fail(
        &wrong_type,
        400,
        "tidak dapat menambahkan balasan karena tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_delete_reply() {
    let app = TestApp::new();
    let (_, owner_token) = app.login_as("dicoding").await;
    let (_, other_token) = app.login_as("johndoe").await;
    let thread_id = app.add_thread(&owner_token).await;
    let comment_id = app.add_comment(&thread_id, &owner_token).await;
    let reply_id = app.add_reply(&thread_id, &comment_id, &owner_token).await;
    let uri = format!(
        "/threads/{}/comments/{}/replies/{}",
        thread_id, comment_id, reply_id
    );

    let forbidden = app.delete_auth(&uri, &other_token).await;
    assert_fail(&forbidden, 403, "REPLY_REPOSITORY.NOT_THE_OWNER");

    let response = app.delete_auth(&uri, &owner_token).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "status": "success" }));
}

#[tokio::test]
async fn test_delete_missing_reply() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&thread_id, &token).await;

    let response = app
        .delete_auth(
            &format!(
                "/threads/{}/comments/{}/replies/reply-404",
                thread_id, comment_id
            ),
            &token,
        )
        .await;

    assert_fail(&response, 404, "Balasan tidak ditemukan");
}
