use std::sync::Arc;

use crate::domain::{
    AddedReply, CommentRepository, NewReply, Payload, RepliesRepository, ThreadRepository,
    UserRepository,
};
use crate::shared::error::AppError;

/// Reply to a comment.
pub struct AddReplyUseCase {
    user_repository: Arc<dyn UserRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    replies_repository: Arc<dyn RepliesRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        replies_repository: Arc<dyn RepliesRepository>,
    ) -> Self {
        Self {
            user_repository,
            thread_repository,
            comment_repository,
            replies_repository,
        }
    }

    pub async fn execute(&self, payload: &Payload) -> Result<AddedReply, AppError> {
        let new_reply = NewReply::try_from(payload)?;

        self.user_repository
            .verify_user_exist(&new_reply.owner)
            .await?;
        self.thread_repository
            .verify_available_thread(&new_reply.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_exist(&new_reply.comment_id)
            .await?;

        self.replies_repository.add_reply(&new_reply).await
    }
}
