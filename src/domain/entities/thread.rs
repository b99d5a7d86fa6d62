//! Thread entities and repository trait.
//!
//! Maps to the `threads` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::CommentDetail;
use crate::domain::value_objects::{Entity, EntityError, Payload};
use crate::shared::error::AppError;

const REPOSITORY: &str = "THREAD_REPOSITORY";

/// Thread creation payload. `owner` is the authenticated user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl TryFrom<&Payload> for NewThread {
    type Error = EntityError;

    fn try_from(payload: &Payload) -> Result<Self, Self::Error> {
        let [title, body, owner] = payload
            .required_strings(["title", "body", "owner"])
            .map_err(|e| EntityError::from_field(Entity::NewThread, e))?;

        Ok(Self { title, body, owner })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// Thread as stored, joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// Thread with its comments, replies and like counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

impl ThreadDetail {
    pub fn new(thread: Thread, comments: Vec<CommentDetail>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }
}

/// Repository trait for Thread data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, _new_thread: &NewThread) -> Result<AddedThread, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Fail with a not-found error if no thread has this id.
    async fn verify_available_thread(&self, _thread_id: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    async fn get_thread_by_id(&self, _thread_id: &str) -> Result<Thread, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }
}
