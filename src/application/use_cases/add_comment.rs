use std::sync::Arc;

use crate::domain::{
    AddedComment, CommentRepository, NewComment, Payload, ThreadRepository, UserRepository,
};
use crate::shared::error::AppError;

/// Comment on a thread.
pub struct AddCommentUseCase {
    user_repository: Arc<dyn UserRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            user_repository,
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, payload: &Payload) -> Result<AddedComment, AppError> {
        let new_comment = NewComment::try_from(payload)?;

        self.user_repository
            .verify_user_exist(&new_comment.owner)
            .await?;
        self.thread_repository
            .verify_available_thread(&new_comment.thread_id)
            .await?;

        self.comment_repository.add_comment(&new_comment).await
    }
}
