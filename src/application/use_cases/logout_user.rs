use std::sync::Arc;

use crate::domain::{AuthenticationRepository, Entity, Payload, RefreshTokenPayload};
use crate::shared::error::AppError;

/// Revoke a refresh token.
pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    pub async fn execute(&self, payload: &Payload) -> Result<(), AppError> {
        let RefreshTokenPayload { refresh_token } =
            RefreshTokenPayload::parse(payload, Entity::DeleteAuthentication)?;

        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;
        self.authentication_repository
            .delete_token(&refresh_token)
            .await
    }
}
