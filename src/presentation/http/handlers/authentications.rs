//! Authentication Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{AccessTokenData, ApiResponse};
use crate::domain::NewAuth;
use crate::presentation::http::extractors::JsonPayload;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Login with credentials
pub async fn post_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<NewAuth>>), AppError> {
    let new_auth = state.use_cases.login_user.execute(&payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(new_auth))))
}

/// Exchange a refresh token for a new access token
pub async fn put_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<ApiResponse<AccessTokenData>>, AppError> {
    let access_token = state
        .use_cases
        .refresh_authentication
        .execute(&payload)
        .await?;

    Ok(Json(ApiResponse::success(AccessTokenData { access_token })))
}

/// Logout (revoke refresh token)
pub async fn delete_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.use_cases.logout_user.execute(&payload).await?;

    Ok(Json(ApiResponse::ok()))
}
