//! `PUT /threads/{threadId}/comments/{commentId}/likes` endpoint tests

use serde_json::json;

use crate::common::{assert_fail, TestApp};

#[tokio::test]
async fn test_toggle_like() {
    let app = TestApp::new();
    let (user_id, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&thread_id, &token).await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    let liked = app.put_auth(&uri, &token).await;
    assert_eq!(liked.status, 200);
    assert_eq!(liked.body, json!({ "status": "success" }));
    assert_eq!(app.forum.like_rows(&comment_id, &user_id), 1);

    let unliked = app.put_auth(&uri, &token).await;
    assert_eq!(unliked.status, 200);
    assert_eq!(app.forum.like_rows(&comment_id, &user_id), 0);

    app.put_auth(&uri, &token).await;
    assert_eq!(app.forum.like_rows(&comment_id, &user_id), 1);
}

#[tokio::test]
async fn test_like_count_is_per_user() {
    let app = TestApp::new();
    let (_, first) = app.login_as("dicoding").await;
    let (_, second) = app.login_as("johndoe").await;
    let thread_id = app.add_thread(&first).await;
    let comment_id = app.add_comment(&thread_id, &first).await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    app.put_auth(&uri, &first).await;
    app.put_auth(&uri, &second).await;

    let thread = app.get(&format!("/threads/{}", thread_id)).await;
    assert_eq!(thread.body["data"]["thread"]["comments"][0]["likeCount"], 2);
}

#[tokio::test]
async fn test_like_comment_from_another_thread() {
    let app = TestApp::new();
    let (_, token) = app.login_as("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let other_thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&other_thread_id, &token).await;

    let response = app
        .put_auth(
            &format!("/threads/{}/comments/{}/likes", thread_id, comment_id),
            &token,
        )
        .await;

    assert_fail(&response, 404, "KOMENTAR_TIDAK_DITEMUKAN_DI_THREAD_INI");
}

#[tokio::test]
async fn test_like_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/threads/thread-123/comments/comment-123/likes",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, 401);
}
