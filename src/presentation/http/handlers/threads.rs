//! Thread Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedThreadData, ApiResponse, ThreadData};
use crate::presentation::http::extractors::{AuthUser, JsonPayload};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a thread owned by the caller
pub async fn post_thread(
    State(state): State<AppState>,
    user: AuthUser,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedThreadData>>), AppError> {
    let payload = payload.only(&["title", "body"]).with("owner", user.id);

    let added_thread = state.use_cases.add_thread.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedThreadData { added_thread })),
    ))
}

/// Thread with its comments, replies and like counts
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<ApiResponse<ThreadData>>, AppError> {
    let thread = state.use_cases.get_thread_detail.execute(&thread_id).await?;

    Ok(Json(ApiResponse::success(ThreadData { thread })))
}
