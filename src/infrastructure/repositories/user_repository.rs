//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{RegisterUser, RegisteredUser, UserRepository};
use crate::shared::error::AppError;
use crate::shared::id_generator::{prefixed_id, IdGenerator};

/// Database row returned by user inserts.
#[derive(Debug, sqlx::FromRow)]
struct RegisteredUserRow {
    id: String,
    username: String,
    fullname: String,
}

impl From<RegisteredUserRow> for RegisteredUser {
    fn from(row: RegisteredUserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            fullname: row.fullname,
        }
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn add_user(&self, register_user: &RegisterUser) -> Result<RegisteredUser, AppError> {
        let id = prefixed_id("user", self.id_generator.as_ref());

        let row = sqlx::query_as::<_, RegisteredUserRow>(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(&id)
        .bind(&register_user.username)
        .bind(&register_user.password)
        .bind(&register_user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Invariant("username tidak tersedia".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into())
    }

    async fn verify_available_username(&self, username: &str) -> Result<(), AppError> {
        let taken: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        if taken.0 {
            return Err(AppError::Invariant("username tidak tersedia".to_string()));
        }

        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(password,)| password)
            .ok_or_else(|| AppError::Invariant("username tidak ditemukan".to_string()))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(id,)| id)
            .ok_or_else(|| AppError::Invariant("user tidak ditemukan".to_string()))
    }

    async fn verify_user_exist(&self, user_id: &str) -> Result<(), AppError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        if !exists.0 {
            return Err(AppError::NotFound("User tidak ditemukan".to_string()));
        }

        Ok(())
    }
}
