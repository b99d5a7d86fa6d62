use std::sync::Arc;

use crate::application::security::AuthenticationTokenManager;
use crate::domain::{AuthenticationRepository, Entity, Payload, RefreshTokenPayload};
use crate::shared::error::AppError;

/// Issue a fresh access token for a stored refresh token.
pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    /// Returns the new access token.
    pub async fn execute(&self, payload: &Payload) -> Result<String, AppError> {
        let RefreshTokenPayload { refresh_token } =
            RefreshTokenPayload::parse(payload, Entity::RefreshAuthentication)?;

        self.token_manager.verify_refresh_token(&refresh_token)?;
        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;

        let token_payload = self.token_manager.decode_refresh_token(&refresh_token)?;
        self.token_manager.create_access_token(&token_payload)
    }
}
