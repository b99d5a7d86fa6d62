use std::sync::Arc;

use crate::domain::{CommentRepository, RepliesRepository, ThreadRepository};
use crate::shared::error::AppError;

/// Soft-delete a reply owned by the caller.
pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    replies_repository: Arc<dyn RepliesRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        replies_repository: Arc<dyn RepliesRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            replies_repository,
        }
    }

    pub async fn execute(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> Result<(), AppError> {
        self.thread_repository
            .verify_available_thread(thread_id)
            .await?;
        self.comment_repository
            .verify_comment_exist(comment_id)
            .await?;
        self.replies_repository
            .verify_reply_owner(reply_id, owner)
            .await?;
        self.replies_repository.delete_reply_by_id(reply_id).await
    }
}
