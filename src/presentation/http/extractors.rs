//! Custom Extractors
//!
//! Axum extractors for authentication and request parsing.

use axum::{
    body::Bytes,
    extract::{FromRef, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::domain::Payload;
use crate::shared::error::AppError;
use crate::startup::AppState;

const MISSING_AUTHENTICATION: &str = "Missing authentication";
const MALFORMED_PAYLOAD: &str = "payload harus berupa JSON yang valid";

/// Authenticated user extracted from a bearer access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// User ID carried in the token; used as `owner`
    pub id: String,
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Authentication(MISSING_AUTHENTICATION.to_string()))?;

        let app_state = AppState::from_ref(state);

        let payload = app_state
            .token_manager
            .decode_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                e
            })?;

        Ok(AuthUser {
            id: payload.id,
            username: payload.username,
        })
    }
}

/// JSON request body as a loosely-typed [`Payload`].
///
/// An empty body is an empty payload, so entity validation reports the
/// missing fields instead of the extractor rejecting the request.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Payload);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Invariant(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonPayload(Payload::new()));
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|_| AppError::Invariant(MALFORMED_PAYLOAD.to_string()))?;

        Ok(JsonPayload(Payload::from_value(value)))
    }
}
