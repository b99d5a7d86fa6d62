//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::shared::error::AppError;
use crate::startup::AppState;

const ROUTE_NOT_FOUND: &str = "Halaman tidak ditemukan";

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(handlers::users::post_user))
        .nest("/authentications", authentication_routes())
        .nest("/threads", thread_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .fallback(route_not_found)
        .with_state(state)
}

/// Login, token refresh and logout (public)
fn authentication_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        post(handlers::authentications::post_authentication)
            .put(handlers::authentications::put_authentication)
            .delete(handlers::authentications::delete_authentication),
    )
}

/// Thread routes. Reads are public, writes require a bearer token
/// (enforced by the `AuthUser` extractor on each handler).
fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::threads::post_thread))
        .route("/{thread_id}", get(handlers::threads::get_thread))
        .route(
            "/{thread_id}/comments",
            post(handlers::comments::post_comment),
        )
        .route(
            "/{thread_id}/comments/{comment_id}",
            delete(handlers::comments::delete_comment),
        )
        .route(
            "/{thread_id}/comments/{comment_id}/replies",
            post(handlers::replies::post_reply),
        )
        .route(
            "/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::replies::delete_reply),
        )
        .route(
            "/{thread_id}/comments/{comment_id}/likes",
            put(handlers::likes::put_like),
        )
}

async fn route_not_found() -> Response {
    AppError::NotFound(ROUTE_NOT_FOUND.to_string()).into_response()
}
