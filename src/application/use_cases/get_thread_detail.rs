use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::domain::{
    CommentDetail, CommentRecord, CommentRepository, LikeRepository, RepliesRepository,
    ReplyDetail, ThreadDetail, ThreadRepository,
};
use crate::shared::error::AppError;

/// Read a thread with its comments, replies and like counts.
///
/// Replies and like counts are fetched concurrently for every comment. The
/// comment order returned by the repository is preserved.
pub struct GetThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    replies_repository: Arc<dyn RepliesRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl GetThreadDetailUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        replies_repository: Arc<dyn RepliesRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            replies_repository,
            like_repository,
        }
    }

    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail, AppError> {
        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        debug!(thread_id, comments = comments.len(), "Assembling thread detail");

        let comments =
            try_join_all(comments.into_iter().map(|comment| self.comment_detail(comment))).await?;

        Ok(ThreadDetail::new(thread, comments))
    }

    async fn comment_detail(&self, comment: CommentRecord) -> Result<CommentDetail, AppError> {
        let (replies, like_count) = futures::try_join!(
            self.replies_repository.get_replies_by_comment_id(&comment.id),
            self.like_repository.count_comment_likes(&comment.id),
        )?;

        let replies = replies.into_iter().map(ReplyDetail::from).collect();

        Ok(CommentDetail::new(comment, like_count, replies))
    }
}
