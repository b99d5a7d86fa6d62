//! Replies Repository Implementation
//!
//! PostgreSQL implementation of reply operations with soft delete.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::violated_foreign_key;
use crate::domain::{AddedReply, NewReply, RepliesRepository, ReplyRecord};
use crate::shared::error::AppError;
use crate::shared::id_generator::{prefixed_id, IdGenerator};

const REPLY_NOT_FOUND: &str = "Balasan tidak ditemukan";

#[derive(Debug, sqlx::FromRow)]
struct AddedReplyRow {
    id: String,
    content: String,
    owner: String,
}

#[derive(Debug, sqlx::FromRow)]
struct ReplyRow {
    id: String,
    comment_id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    is_deleted: bool,
}

impl From<ReplyRow> for ReplyRecord {
    fn from(row: ReplyRow) -> Self {
        Self {
            id: row.id,
            comment_id: row.comment_id,
            username: row.username,
            date: row.date,
            content: row.content,
            is_deleted: row.is_deleted,
        }
    }
}

/// PostgreSQL replies repository implementation.
#[derive(Clone)]
pub struct PgRepliesRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgRepliesRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl RepliesRepository for PgRepliesRepository {
    async fn add_reply(&self, new_reply: &NewReply) -> Result<AddedReply, AppError> {
        let id = prefixed_id("reply", self.id_generator.as_ref());

        let row = sqlx::query_as::<_, AddedReplyRow>(
            r#"
            INSERT INTO replies (id, comment_id, content, owner, date, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&new_reply.comment_id)
        .bind(&new_reply.content)
        .bind(&new_reply.owner)
        .bind(new_reply.date)
        .bind(new_reply.is_deleted)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e).as_deref() {
            Some("fk_replies_comment_comments_id") => {
                AppError::NotFound("COMMENT_NOT_FOUND".to_string())
            }
            Some("fk_replies_owner_users_id") => AppError::NotFound("USER_NOT_FOUND".to_string()),
            _ => AppError::Database(e),
        })?;

        Ok(AddedReply {
            id: row.id,
            content: row.content,
            owner: row.owner,
        })
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT owner FROM replies WHERE id = $1")
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await?;

        let (reply_owner,) = row.ok_or_else(|| AppError::NotFound(REPLY_NOT_FOUND.to_string()))?;

        if reply_owner != owner {
            return Err(AppError::Authorization(
                "REPLY_REPOSITORY.NOT_THE_OWNER".to_string(),
            ));
        }

        Ok(())
    }

    async fn delete_reply_by_id(&self, reply_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(REPLY_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyRecord>, AppError> {
        let rows = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT replies.id, replies.comment_id, users.username, replies.date,
                   replies.content, replies.is_deleted
            FROM replies
            INNER JOIN users ON users.id = replies.owner
            WHERE replies.comment_id = $1
            ORDER BY replies.date ASC
            "#,
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ReplyRecord::from).collect())
    }
}
