use std::sync::Arc;

use crate::domain::{CommentRepository, ThreadRepository};
use crate::shared::error::AppError;

/// Soft-delete a comment owned by the caller.
pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), AppError> {
        self.thread_repository
            .verify_available_thread(thread_id)
            .await?;
        self.comment_repository
            .verify_comment_owner(comment_id, owner)
            .await?;
        self.comment_repository.delete_comment(comment_id).await
    }
}
