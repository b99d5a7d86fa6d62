use std::sync::Arc;

use crate::domain::{AddedThread, NewThread, Payload, ThreadRepository, UserRepository};
use crate::shared::error::AppError;

/// Start a thread owned by the authenticated user.
pub struct AddThreadUseCase {
    user_repository: Arc<dyn UserRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            user_repository,
            thread_repository,
        }
    }

    /// `payload` carries `title`, `body` and `owner`.
    pub async fn execute(&self, payload: &Payload) -> Result<AddedThread, AppError> {
        let new_thread = NewThread::try_from(payload)?;

        self.user_repository
            .verify_user_exist(&new_thread.owner)
            .await?;

        self.thread_repository.add_thread(&new_thread).await
    }
}
