//! Reply entities and repository trait.
//!
//! Maps to the `replies` table. Like comments, replies are soft-deleted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Entity, EntityError, Payload};
use crate::shared::error::AppError;

const REPOSITORY: &str = "REPLY_REPOSITORY";

/// Content shown in place of a deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// Reply creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
    pub comment_id: String,
    pub date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl TryFrom<&Payload> for NewReply {
    type Error = EntityError;

    fn try_from(payload: &Payload) -> Result<Self, Self::Error> {
        let field_error = |e| EntityError::from_field(Entity::NewReply, e);

        let [content, thread_id, owner, comment_id] = payload
            .required_strings(["content", "threadId", "owner", "commentId"])
            .map_err(field_error)?;
        let date = payload
            .optional_datetime("date")
            .map_err(field_error)?
            .unwrap_or_else(Utc::now);
        let is_deleted = payload.optional_bool("isDeleted").map_err(field_error)?;

        Ok(Self {
            content,
            thread_id,
            owner,
            comment_id,
            date,
            is_deleted,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Reply row joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    pub id: String,
    pub comment_id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

/// Reply as presented under its comment in the thread detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyDetail {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
    #[serde(skip_serializing)]
    pub is_deleted: bool,
}

impl From<ReplyRecord> for ReplyDetail {
    fn from(record: ReplyRecord) -> Self {
        let content = if record.is_deleted {
            DELETED_REPLY_CONTENT.to_string()
        } else {
            record.content
        };

        Self {
            id: record.id,
            content,
            date: record.date,
            username: record.username,
            is_deleted: record.is_deleted,
        }
    }
}

/// Repository trait for Reply data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepliesRepository: Send + Sync {
    async fn add_reply(&self, _new_reply: &NewReply) -> Result<AddedReply, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Fail with a not-found error if the reply is missing and an
    /// authorization error if `owner` did not write it.
    async fn verify_reply_owner(&self, _reply_id: &str, _owner: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Soft delete. The row is kept with `is_deleted` set.
    async fn delete_reply_by_id(&self, _reply_id: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Replies to a comment, oldest first, deleted ones included.
    async fn get_replies_by_comment_id(
        &self,
        _comment_id: &str,
    ) -> Result<Vec<ReplyRecord>, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }
}
