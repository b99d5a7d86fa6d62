//! Reply Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedReplyData, ApiResponse};
use crate::presentation::http::extractors::{AuthUser, JsonPayload};
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn post_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedReplyData>>), AppError> {
    let payload = payload
        .only(&["content"])
        .with("owner", user.id)
        .with("threadId", thread_id)
        .with("commentId", comment_id);

    let added_reply = state.use_cases.add_reply.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedReplyData { added_reply })),
    ))
}

pub async fn delete_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .use_cases
        .delete_reply
        .execute(&thread_id, &comment_id, &reply_id, &user.id)
        .await?;

    Ok(Json(ApiResponse::ok()))
}
