//! User Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{AddedUserData, ApiResponse};
use crate::presentation::http::extractors::JsonPayload;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new user
pub async fn post_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedUserData>>), AppError> {
    let added_user = state.use_cases.add_user.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedUserData { added_user })),
    ))
}
