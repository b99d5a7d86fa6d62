//! Like Repository Implementation
//!
//! PostgreSQL implementation of comment likes. The `(comment_id, owner)`
//! unique constraint keeps at most one row per user and comment.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::violated_foreign_key;
use crate::domain::{LikeRepository, NewLike};
use crate::shared::error::AppError;
use crate::shared::id_generator::{prefixed_id, IdGenerator};

/// PostgreSQL implementation of the LikeRepository.
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    /// Uses INSERT ON CONFLICT so a concurrent duplicate like is a no-op.
    async fn like_comment(&self, new_like: &NewLike) -> Result<(), AppError> {
        let id = prefixed_id("like", self.id_generator.as_ref());

        sqlx::query(
            r#"
            INSERT INTO likes (id, comment_id, owner)
            VALUES ($1, $2, $3)
            ON CONFLICT (comment_id, owner) DO NOTHING
            "#,
        )
        .bind(&id)
        .bind(&new_like.comment_id)
        .bind(&new_like.owner)
        .execute(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e) {
            Some(_) => AppError::Invariant("Gagal menyukai komentar".to_string()),
            None => AppError::Database(e),
        })?;

        Ok(())
    }

    /// Silently succeeds if the like doesn't exist.
    async fn unlike_comment(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM likes WHERE comment_id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn is_comment_liked(&self, comment_id: &str, owner: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM likes
                WHERE comment_id = $1 AND owner = $2
            )
            "#,
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    async fn count_comment_likes(&self, comment_id: &str) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM likes WHERE comment_id = $1")
            .bind(comment_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
