//! JWT token manager.
//!
//! Access and refresh tokens are HS256 JWTs signed with separate keys so a
//! refresh token can never be presented as an access token.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::security::{AuthenticationTokenManager, TokenPayload};
use crate::config::JwtSettings;
use crate::shared::error::AppError;

const INVALID_REFRESH_TOKEN: &str = "refresh token tidak valid";
const INVALID_ACCESS_TOKEN: &str = "access token tidak valid";
const EXPIRED_ACCESS_TOKEN: &str = "access token kedaluwarsa";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Unique token ID; two tokens issued in the same second still differ
    pub jti: String,
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// `AuthenticationTokenManager` backed by `jsonwebtoken`.
pub struct JwtTokenManager {
    access: SigningKeys,
    refresh: SigningKeys,
    access_token_age: Duration,
    refresh_token_age: Duration,
    validation: Validation,
}

impl JwtTokenManager {
    pub fn new(settings: &JwtSettings) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            access: SigningKeys::from_secret(&settings.access_token_key),
            refresh: SigningKeys::from_secret(&settings.refresh_token_key),
            access_token_age: Duration::seconds(settings.access_token_age_seconds),
            refresh_token_age: Duration::days(settings.refresh_token_age_days),
            validation,
        }
    }

    fn sign(
        &self,
        payload: &TokenPayload,
        key: &EncodingKey,
        age: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: payload.id.clone(),
            username: payload.username.clone(),
            iat: now.timestamp(),
            exp: (now + age).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, key)
            .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }

    fn claims(&self, token: &str, key: &DecodingKey) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, key, &self.validation).map(|data| data.claims)
    }
}

impl From<Claims> for TokenPayload {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
        }
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        self.sign(payload, &self.access.encoding, self.access_token_age)
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        self.sign(payload, &self.refresh.encoding, self.refresh_token_age)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<(), AppError> {
        self.claims(token, &self.refresh.decoding)
            .map(|_| ())
            .map_err(|_| AppError::Invariant(INVALID_REFRESH_TOKEN.to_string()))
    }

    fn decode_access_token(&self, token: &str) -> Result<TokenPayload, AppError> {
        self.claims(token, &self.access.decoding)
            .map(TokenPayload::from)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::Authentication(EXPIRED_ACCESS_TOKEN.to_string())
                }
                _ => AppError::Authentication(INVALID_ACCESS_TOKEN.to_string()),
            })
    }

    fn decode_refresh_token(&self, token: &str) -> Result<TokenPayload, AppError> {
        self.claims(token, &self.refresh.decoding)
            .map(TokenPayload::from)
            .map_err(|_| AppError::Invariant(INVALID_REFRESH_TOKEN.to_string()))
    }
}
