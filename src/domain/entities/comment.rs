//! Comment entities and repository trait.
//!
//! Maps to the `comments` table. Comments are soft-deleted: the row stays and
//! `is_deleted` is set, so the thread detail can show a placeholder.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reply::ReplyDetail;
use crate::domain::value_objects::{Entity, EntityError, Payload};
use crate::shared::error::AppError;

const REPOSITORY: &str = "COMMENT_REPOSITORY";

/// Content shown in place of a deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Comment creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub owner: String,
    pub thread_id: String,
    pub date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl TryFrom<&Payload> for NewComment {
    type Error = EntityError;

    fn try_from(payload: &Payload) -> Result<Self, Self::Error> {
        let field_error = |e| EntityError::from_field(Entity::NewComment, e);

        let [content, owner, thread_id] = payload
            .required_strings(["content", "owner", "threadId"])
            .map_err(field_error)?;
        let date = payload
            .optional_datetime("date")
            .map_err(field_error)?
            .unwrap_or_else(Utc::now);
        let is_deleted = payload.optional_bool("isDeleted").map_err(field_error)?;

        Ok(Self {
            content,
            owner,
            thread_id,
            date,
            is_deleted,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Comment row joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

/// Comment as presented in the thread detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<ReplyDetail>,
    #[serde(skip_serializing)]
    pub is_deleted: bool,
}

impl CommentDetail {
    /// Build the detail view, masking the content of a deleted comment.
    pub fn new(record: CommentRecord, like_count: i64, replies: Vec<ReplyDetail>) -> Self {
        let content = if record.is_deleted {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            record.content
        };

        Self {
            id: record.id,
            username: record.username,
            date: record.date,
            content,
            like_count,
            replies,
            is_deleted: record.is_deleted,
        }
    }
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, _new_comment: &NewComment) -> Result<AddedComment, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Fail with a not-found error if the comment is missing and an
    /// authorization error if `owner` did not write it.
    async fn verify_comment_owner(&self, _comment_id: &str, _owner: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Fail with a not-found error if the comment does not belong to the thread.
    async fn verify_comment_belongs_to_thread(
        &self,
        _comment_id: &str,
        _thread_id: &str,
    ) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    async fn verify_comment_exist(&self, _comment_id: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Soft delete. The row is kept with `is_deleted` set.
    async fn delete_comment(&self, _comment_id: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Comments of a thread, oldest first, deleted ones included.
    async fn get_comments_by_thread_id(
        &self,
        _thread_id: &str,
    ) -> Result<Vec<CommentRecord>, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }
}
