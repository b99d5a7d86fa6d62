//! Comment Repository Implementation
//!
//! PostgreSQL implementation of comment operations. Deletion only sets
//! `is_deleted`; rows are never removed.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::violated_foreign_key;
use crate::domain::{AddedComment, CommentRecord, CommentRepository, NewComment};
use crate::shared::error::AppError;
use crate::shared::id_generator::{prefixed_id, IdGenerator};

const COMMENT_NOT_FOUND: &str = "Komentar tidak ditemukan";

#[derive(Debug, sqlx::FromRow)]
struct AddedCommentRow {
    id: String,
    content: String,
    owner: String,
}

/// Comment joined with the owner's username.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    is_deleted: bool,
}

impl From<CommentRow> for CommentRecord {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            date: row.date,
            content: row.content,
            is_deleted: row.is_deleted,
        }
    }
}

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, AppError> {
        let id = prefixed_id("comment", self.id_generator.as_ref());

        let row = sqlx::query_as::<_, AddedCommentRow>(
            r#"
            INSERT INTO comments (id, thread_id, content, owner, date, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&new_comment.thread_id)
        .bind(&new_comment.content)
        .bind(&new_comment.owner)
        .bind(new_comment.date)
        .bind(new_comment.is_deleted)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e).as_deref() {
            Some("fk_comments_thread_threads_id") => {
                AppError::NotFound("THREAD_NOT_FOUND".to_string())
            }
            Some("fk_comments_owner_users") => AppError::NotFound("USER_NOT_FOUND".to_string()),
            _ => AppError::Database(e),
        })?;

        Ok(AddedComment {
            id: row.id,
            content: row.content,
            owner: row.owner,
        })
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT owner FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            None => Err(AppError::NotFound("COMMENT_NOT_FOUND".to_string())),
            Some((comment_owner,)) if comment_owner != owner => {
                Err(AppError::Authorization("NOT_COMMENT_OWNER".to_string()))
            }
            Some(_) => Ok(()),
        }
    }

    async fn verify_comment_belongs_to_thread(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<(), AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND thread_id = $2)",
        )
        .bind(comment_id)
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists.0 {
            return Err(AppError::NotFound(
                "KOMENTAR_TIDAK_DITEMUKAN_DI_THREAD_INI".to_string(),
            ));
        }

        Ok(())
    }

    async fn verify_comment_exist(&self, comment_id: &str) -> Result<(), AppError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)")
            .bind(comment_id)
            .fetch_one(&self.pool)
            .await?;

        if !exists.0 {
            return Err(AppError::NotFound(COMMENT_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(COMMENT_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentRecord>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comments.id, users.username, comments.date, comments.content, comments.is_deleted
            FROM comments
            INNER JOIN users ON users.id = comments.owner
            WHERE comments.thread_id = $1
            ORDER BY comments.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRecord::from).collect())
    }
}
