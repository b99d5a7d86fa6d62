//! Entity Error Translator
//!
//! Converts entity validation codes into user-facing invariant errors.

use crate::domain::value_objects::{Entity, EntityError, Violation};

use super::error::AppError;

/// Translate an error into its client-facing form.
///
/// Entity errors with a known message become `AppError::Invariant`; every
/// other error is returned unchanged.
pub fn translate(error: AppError) -> AppError {
    match error {
        AppError::Entity(entity_error) => match message_for(&entity_error) {
            Some(message) => AppError::Invariant(message.to_string()),
            None => AppError::Entity(entity_error),
        },
        other => other,
    }
}

/// Localized message for an entity error, if one is defined.
pub fn message_for(error: &EntityError) -> Option<&'static str> {
    use Entity::*;
    use Violation::*;

    let message = match (error.entity, error.violation) {
        (RegisterUser, NotContainNeededProperty) => {
            "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
        }
        (RegisterUser, NotMeetDataTypeSpecification) => {
            "tidak dapat membuat user baru karena tipe data tidak sesuai"
        }
        (RegisterUser, UsernameLimitChar) => {
            "tidak dapat membuat user baru karena karakter username melebihi batas limit"
        }
        (RegisterUser, UsernameContainRestrictedCharacter) => {
            "tidak dapat membuat user baru karena username mengandung karakter terlarang"
        }
        (UserLogin, NotContainNeededProperty) => "harus mengirimkan username dan password",
        (UserLogin, NotMeetDataTypeSpecification) => "username dan password harus string",
        (RefreshAuthentication | DeleteAuthentication, NotContainRefreshToken) => {
            "harus mengirimkan token refresh"
        }
        (RefreshAuthentication | DeleteAuthentication, PayloadNotMeetDataTypeSpecification) => {
            "refresh token harus string"
        }
        (NewThread, NotContainNeededProperty) => {
            "tidak dapat membuat thread karena properti yang dibutuhkan tidak ada"
        }
        (NewThread, NotMeetDataTypeSpecification) => {
            "tidak dapat membuat thread karena tipe data tidak sesuai"
        }
        (NewComment, NotContainNeededProperty) => {
            "tidak dapat menambahkan komentar karena properti yang dibutuhkan tidak ada"
        }
        (NewComment, NotMeetDataTypeSpecification) => {
            "tidak dapat menambahkan komentar karena tipe data tidak sesuai"
        }
        (NewReply, NotContainNeededProperty) => {
            "tidak dapat menambahkan balasan karena properti yang dibutuhkan tidak ada"
        }
        (NewReply, NotMeetDataTypeSpecification) => {
            "tidak dapat menambahkan balasan karena tipe data tidak sesuai"
        }
        (NewLike, NotContainNeededProperty) => {
            "Gagal menyukai komentar. Properti yang dibutuhkan tidak ada"
        }
        (NewLike, NotMeetDataTypeSpecification) => "Gagal menyukai komentar. Tipe data tidak sesuai",
        _ => return None,
    };

    Some(message)
}
