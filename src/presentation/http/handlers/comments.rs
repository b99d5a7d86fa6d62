//! Comment Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedCommentData, ApiResponse};
use crate::presentation::http::extractors::{AuthUser, JsonPayload};
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn post_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(thread_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedCommentData>>), AppError> {
    let payload = payload
        .only(&["content"])
        .with("owner", user.id)
        .with("threadId", thread_id);

    let added_comment = state.use_cases.add_comment.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedCommentData { added_comment })),
    ))
}

/// Soft-delete a comment; only its owner may do so
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .use_cases
        .delete_comment
        .execute(&thread_id, &comment_id, &user.id)
        .await?;

    Ok(Json(ApiResponse::ok()))
}
