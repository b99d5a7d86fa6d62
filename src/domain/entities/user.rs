//! User entities and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Entity, EntityError, Payload, Violation};
use crate::shared::error::AppError;

const REPOSITORY: &str = "USER_REPOSITORY";

/// Maximum username length accepted at registration.
pub const USERNAME_MAX_LENGTH: usize = 50;

/// Registration payload.
///
/// `password` holds the plain password until the use case replaces it with
/// the hash via [`RegisterUser::with_password`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    /// Replace the password, keeping the other fields.
    pub fn with_password(self, password: String) -> Self {
        Self { password, ..self }
    }
}

impl TryFrom<&Payload> for RegisterUser {
    type Error = EntityError;

    fn try_from(payload: &Payload) -> Result<Self, Self::Error> {
        let [username, password, fullname] = payload
            .required_strings(["username", "password", "fullname"])
            .map_err(|e| EntityError::from_field(Entity::RegisterUser, e))?;

        if username.chars().count() > USERNAME_MAX_LENGTH {
            return Err(EntityError::new(
                Entity::RegisterUser,
                Violation::UsernameLimitChar,
            ));
        }

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(EntityError::new(
                Entity::RegisterUser,
                Violation::UsernameContainRestrictedCharacter,
            ));
        }

        Ok(Self {
            username,
            password,
            fullname,
        })
    }
}

/// A user as returned after registration. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// Repository trait for User data access operations.
///
/// Every method fails with `USER_REPOSITORY.METHOD_NOT_IMPLEMENTED` unless
/// the implementation overrides it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user whose password is already hashed.
    async fn add_user(&self, _register_user: &RegisterUser) -> Result<RegisteredUser, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Fail with an invariant error if the username is taken.
    async fn verify_available_username(&self, _username: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Stored password hash for a username.
    async fn get_password_by_username(&self, _username: &str) -> Result<String, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    async fn get_id_by_username(&self, _username: &str) -> Result<String, AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Fail with a not-found error if no user has this id.
    async fn verify_user_exist(&self, _user_id: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }
}
