//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::value_objects::EntityError;
use crate::shared::error_translator;

/// Message returned to clients for every unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan pada server kami";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request or stored value violates a business invariant.
    #[error("{0}")]
    Invariant(String),

    /// Credentials or tokens could not be verified.
    #[error("{0}")]
    Authentication(String),

    /// The caller is authenticated but does not own the resource.
    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    NotFound(String),

    /// Entity construction rejected a payload. Translated before responding.
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// A repository method was called on an implementation that does not provide it.
    #[error("{0}.METHOD_NOT_IMPLEMENTED")]
    MethodNotImplemented(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// HTTP status code this error maps to once translated.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Invariant(_) => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Authorization(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Entity(_)
            | AppError::MethodNotImplemented(_)
            | AppError::Internal(_)
            | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = error_translator::translate(self);
        let status = error.status_code();

        let message = match &error {
            AppError::Invariant(msg)
            | AppError::Authentication(msg)
            | AppError::Authorization(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::Entity(e) => {
                tracing::error!(code = %e, "Untranslated entity error");
                INTERNAL_ERROR_MESSAGE.into()
            }
            AppError::MethodNotImplemented(repository) => {
                tracing::error!(repository, "Repository method not implemented");
                INTERNAL_ERROR_MESSAGE.into()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                INTERNAL_ERROR_MESSAGE.into()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                INTERNAL_ERROR_MESSAGE.into()
            }
        };

        let body = ErrorResponse {
            status: "fail",
            message,
        };

        (status, Json(body)).into_response()
    }
}
