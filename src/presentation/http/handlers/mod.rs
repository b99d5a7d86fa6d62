//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Handlers merge path segments
//! and the authenticated user id into the request payload, then hand it
//! to a use case.

pub mod authentications;
pub mod comments;
pub mod health;
pub mod likes;
pub mod replies;
pub mod threads;
pub mod users;
