use std::sync::Arc;

use tracing::debug;

use crate::domain::{CommentRepository, LikeRepository, NewLike, Payload, UserRepository};
use crate::shared::error::AppError;

/// Like state after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeStatus {
    Liked,
    Unliked,
}

/// Like a comment, or remove the caller's like if it is already there.
///
/// The read-then-write is not transactional. Concurrent toggles by the same
/// user cannot produce duplicate rows because the insert ignores conflicts
/// on `(comment_id, owner)`.
pub struct ToggleLikeUseCase {
    user_repository: Arc<dyn UserRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl ToggleLikeUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            user_repository,
            comment_repository,
            like_repository,
        }
    }

    /// `payload` carries `commentId` and `owner`.
    pub async fn execute(&self, thread_id: &str, payload: &Payload) -> Result<LikeStatus, AppError> {
        let new_like = NewLike::try_from(payload)?;

        self.user_repository
            .verify_user_exist(&new_like.owner)
            .await?;
        self.comment_repository
            .verify_comment_belongs_to_thread(&new_like.comment_id, thread_id)
            .await?;
        self.comment_repository
            .verify_comment_exist(&new_like.comment_id)
            .await?;

        let liked = self
            .like_repository
            .is_comment_liked(&new_like.comment_id, &new_like.owner)
            .await?;

        let status = if liked {
            self.like_repository
                .unlike_comment(&new_like.comment_id, &new_like.owner)
                .await?;
            LikeStatus::Unliked
        } else {
            self.like_repository.like_comment(&new_like).await?;
            LikeStatus::Liked
        };

        debug!(comment_id = %new_like.comment_id, ?status, "Comment like toggled");

        Ok(status)
    }
}
