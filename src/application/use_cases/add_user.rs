use std::sync::Arc;

use crate::application::security::PasswordHash;
use crate::domain::{Payload, RegisterUser, RegisteredUser, UserRepository};
use crate::shared::error::AppError;

/// Register a new account.
pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

impl AddUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, password_hash: Arc<dyn PasswordHash>) -> Self {
        Self {
            user_repository,
            password_hash,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, payload: &Payload) -> Result<RegisteredUser, AppError> {
        let register_user = RegisterUser::try_from(payload)?;

        self.user_repository
            .verify_available_username(&register_user.username)
            .await?;

        let hashed = self.password_hash.hash(&register_user.password)?;
        let registered = self
            .user_repository
            .add_user(&register_user.with_password(hashed))
            .await?;

        tracing::info!(user_id = %registered.id, "User registered");

        Ok(registered)
    }
}
