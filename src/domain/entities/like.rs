//! Comment like entity and repository trait.
//!
//! Maps to the `likes` table. A user likes a comment at most once.

use async_trait::async_trait;

use crate::domain::value_objects::{Entity, EntityError, Payload};
use crate::shared::error::AppError;

const REPOSITORY: &str = "LIKE_REPOSITORY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLike {
    pub comment_id: String,
    pub owner: String,
}

impl TryFrom<&Payload> for NewLike {
    type Error = EntityError;

    fn try_from(payload: &Payload) -> Result<Self, Self::Error> {
        let [comment_id, owner] = payload
            .required_strings(["commentId", "owner"])
            .map_err(|e| EntityError::from_field(Entity::NewLike, e))?;

        Ok(Self { comment_id, owner })
    }
}

/// Repository trait for Like data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record a like. Liking an already-liked comment is a no-op.
    async fn like_comment(&self, _new_like: &NewLike) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    async fn unlike_comment(&self, _comment_id: &str, _owner: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    async fn is_comment_liked(&self, _comment_id: &str, _owner: &str) -> Result<bool, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    async fn count_comment_likes(&self, _comment_id: &str) -> Result<i64, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }
}
