use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::security::{AuthenticationTokenManager, PasswordHash, TokenPayload};
use crate::domain::{AuthenticationRepository, NewAuth, Payload, UserLogin, UserRepository};
use crate::shared::error::AppError;

/// Exchange credentials for an access/refresh token pair.
pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    password_hash: Arc<dyn PasswordHash>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        password_hash: Arc<dyn PasswordHash>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            password_hash,
            token_manager,
        }
    }

    #[instrument(skip_all, level = "debug")]
    pub async fn execute(&self, payload: &Payload) -> Result<NewAuth, AppError> {
        let UserLogin { username, password } = UserLogin::try_from(payload)?;

        let hashed = self
            .user_repository
            .get_password_by_username(&username)
            .await?;
        self.password_hash.compare_password(&password, &hashed)?;

        let id = self.user_repository.get_id_by_username(&username).await?;
        let token_payload = TokenPayload { id, username };

        let access_token = self.token_manager.create_access_token(&token_payload)?;
        let refresh_token = self.token_manager.create_refresh_token(&token_payload)?;

        self.authentication_repository
            .add_token(&refresh_token)
            .await?;

        debug!(user_id = %token_payload.id, "User logged in");

        Ok(NewAuth {
            access_token,
            refresh_token,
        })
    }
}
