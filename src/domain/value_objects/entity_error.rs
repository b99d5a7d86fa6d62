//! Entity validation errors.
//!
//! Every payload entity rejects malformed input with a code of the form
//! `<ENTITY>.<VIOLATION>`, for example `NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`.

use std::fmt;

use super::payload::FieldError;

/// Entity (or use case payload) that produced the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    RegisterUser,
    UserLogin,
    RefreshAuthentication,
    DeleteAuthentication,
    NewThread,
    NewComment,
    NewReply,
    NewLike,
}

impl Entity {
    /// Code prefix for this entity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegisterUser => "REGISTER_USER",
            Self::UserLogin => "USER_LOGIN",
            Self::RefreshAuthentication => "REFRESH_AUTHENTICATION_USE_CASE",
            Self::DeleteAuthentication => "DELETE_AUTHENTICATION_USE_CASE",
            Self::NewThread => "NEW_THREAD",
            Self::NewComment => "NEW_COMMENT",
            Self::NewReply => "NEW_REPLY",
            Self::NewLike => "NEW_LIKE",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was wrong with the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    NotContainNeededProperty,
    NotMeetDataTypeSpecification,
    UsernameLimitChar,
    UsernameContainRestrictedCharacter,
    NotContainRefreshToken,
    PayloadNotMeetDataTypeSpecification,
}

impl Violation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotContainNeededProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::NotMeetDataTypeSpecification => "NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::UsernameLimitChar => "USERNAME_LIMIT_CHAR",
            Self::UsernameContainRestrictedCharacter => "USERNAME_CONTAIN_RESTRICTED_CHARACTER",
            Self::NotContainRefreshToken => "NOT_CONTAIN_REFRESH_TOKEN",
            Self::PayloadNotMeetDataTypeSpecification => "PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure raised while constructing an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{entity}.{violation}")]
pub struct EntityError {
    pub entity: Entity,
    pub violation: Violation,
}

impl EntityError {
    pub fn new(entity: Entity, violation: Violation) -> Self {
        Self { entity, violation }
    }

    /// Map a payload field error onto the generic property/type violations.
    pub fn from_field(entity: Entity, error: FieldError) -> Self {
        let violation = match error {
            FieldError::Missing => Violation::NotContainNeededProperty,
            FieldError::WrongType => Violation::NotMeetDataTypeSpecification,
        };
        Self::new(entity, violation)
    }

    /// Full error code, e.g. `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`.
    pub fn code(&self) -> String {
        self.to_string()
    }
}
