//! Security adapters for password hashing and token handling.

mod argon2_password_hash;
mod jwt_token_manager;

pub use argon2_password_hash::Argon2PasswordHash;
pub use jwt_token_manager::{Claims, JwtTokenManager};
