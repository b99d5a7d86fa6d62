//! Like Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::ApiResponse;
use crate::domain::Payload;
use crate::presentation::http::extractors::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Like the comment, or remove the caller's like if one exists
pub async fn put_like(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let payload = Payload::new()
        .with("commentId", comment_id)
        .with("owner", user.id);

    state
        .use_cases
        .toggle_like
        .execute(&thread_id, &payload)
        .await?;

    Ok(Json(ApiResponse::ok()))
}
