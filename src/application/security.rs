//! Security ports.
//!
//! Password hashing and token handling are injected into the use cases
//! through these traits; the adapters live in `infrastructure::security`.

use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Message returned when login credentials do not match.
pub const WRONG_CREDENTIALS_MESSAGE: &str = "kredensial yang Anda masukkan salah";

/// Identity carried inside access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

/// Password hashing trait for dependency injection
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHash: Send + Sync {
    /// Hash a plain password into a self-describing string.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Fail with an authentication error unless `password` matches `hashed`.
    fn compare_password(&self, password: &str, hashed: &str) -> Result<(), AppError>;
}

/// Token issuing and verification.
#[cfg_attr(test, mockall::automock)]
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    /// Fail with an invariant error if the signature or expiry is invalid.
    fn verify_refresh_token(&self, token: &str) -> Result<(), AppError>;

    /// Decode a bearer token. Invalid tokens are authentication errors.
    fn decode_access_token(&self, token: &str) -> Result<TokenPayload, AppError>;

    fn decode_refresh_token(&self, token: &str) -> Result<TokenPayload, AppError>;
}
