//! Authentication Repository Implementation
//!
//! Refresh tokens are stored as SHA-256 hex digests, never in plain text.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use sqlx::PgPool;

use crate::domain::AuthenticationRepository;
use crate::shared::error::AppError;

/// PostgreSQL implementation of the AuthenticationRepository.
#[derive(Clone)]
pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hash refresh token for storage
    fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    async fn add_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO authentications (token_hash)
            VALUES ($1)
            ON CONFLICT (token_hash) DO NOTHING
            "#,
        )
        .bind(Self::hash_token(token))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<(), AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM authentications WHERE token_hash = $1)",
        )
        .bind(Self::hash_token(token))
        .fetch_one(&self.pool)
        .await?;

        if !exists.0 {
            return Err(AppError::Invariant(
                "refresh token tidak ditemukan di database".to_string(),
            ));
        }

        Ok(())
    }

    async fn delete_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM authentications WHERE token_hash = $1")
            .bind(Self::hash_token(token))
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
