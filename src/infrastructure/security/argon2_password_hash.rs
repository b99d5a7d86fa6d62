//! Argon2id password hashing.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as ParsedHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};

use crate::application::security::{PasswordHash, WRONG_CREDENTIALS_MESSAGE};
use crate::shared::error::AppError;

/// `PasswordHash` backed by Argon2id with default parameters.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHash;

impl Argon2PasswordHash {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHash for Argon2PasswordHash {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
    }

    fn compare_password(&self, password: &str, hashed: &str) -> Result<(), AppError> {
        // A stored value that is not a PHC string can never match.
        let parsed_hash = ParsedHash::new(hashed)
            .map_err(|_| AppError::Authentication(WRONG_CREDENTIALS_MESSAGE.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Authentication(WRONG_CREDENTIALS_MESSAGE.to_string()))
    }
}
