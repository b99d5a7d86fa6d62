//! Authentication entities and repository trait.
//!
//! Maps to the `authentications` table, which stores issued refresh tokens.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Entity, EntityError, FieldError, Payload, Violation};
use crate::shared::error::AppError;

const REPOSITORY: &str = "AUTHENTICATION_REPOSITORY";

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl TryFrom<&Payload> for UserLogin {
    type Error = EntityError;

    fn try_from(payload: &Payload) -> Result<Self, Self::Error> {
        let [username, password] = payload
            .required_strings(["username", "password"])
            .map_err(|e| EntityError::from_field(Entity::UserLogin, e))?;

        Ok(Self { username, password })
    }
}

/// Token pair issued at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}

/// Body of the refresh and logout requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenPayload {
    pub refresh_token: String,
}

impl RefreshTokenPayload {
    /// Read `refreshToken`, reporting failures under the given use case.
    pub fn parse(payload: &Payload, entity: Entity) -> Result<Self, EntityError> {
        let refresh_token = payload.required_string("refreshToken").map_err(|e| {
            let violation = match e {
                FieldError::Missing => Violation::NotContainRefreshToken,
                FieldError::WrongType => Violation::PayloadNotMeetDataTypeSpecification,
            };
            EntityError::new(entity, violation)
        })?;

        Ok(Self { refresh_token })
    }
}

/// Repository trait for refresh-token persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, _token: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    /// Fail with an invariant error if the token was never stored or has been deleted.
    async fn check_availability_token(&self, _token: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }

    async fn delete_token(&self, _token: &str) -> Result<(), AppError> {
        Err(AppError::MethodNotImplemented(REPOSITORY))
    }
}
