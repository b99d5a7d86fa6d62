//! Thread Repository Implementation
//!
//! PostgreSQL implementation of the ThreadRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::violated_foreign_key;
use crate::domain::{AddedThread, NewThread, Thread, ThreadRepository};
use crate::shared::error::AppError;
use crate::shared::id_generator::{prefixed_id, IdGenerator};

const THREAD_NOT_FOUND: &str = "Thread tidak ditemukan";

#[derive(Debug, sqlx::FromRow)]
struct AddedThreadRow {
    id: String,
    title: String,
    owner: String,
}

/// Thread joined with the owner's username.
#[derive(Debug, sqlx::FromRow)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
    username: String,
}

impl From<ThreadRow> for Thread {
    fn from(row: ThreadRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            date: row.date,
            username: row.username,
        }
    }
}

/// PostgreSQL thread repository implementation.
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, AppError> {
        let id = prefixed_id("thread", self.id_generator.as_ref());

        let row = sqlx::query_as::<_, AddedThreadRow>(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(&new_thread.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e) {
            Some(_) => AppError::Invariant("Gagal menambahkan thread ke database".to_string()),
            None => AppError::Database(e),
        })?;

        Ok(AddedThread {
            id: row.id,
            title: row.title,
            owner: row.owner,
        })
    }

    async fn verify_available_thread(&self, thread_id: &str) -> Result<(), AppError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)")
            .bind(thread_id)
            .fetch_one(&self.pool)
            .await?;

        if !exists.0 {
            return Err(AppError::NotFound(THREAD_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread, AppError> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT threads.id, threads.title, threads.body, threads.date, users.username
            FROM threads
            INNER JOIN users ON users.id = threads.owner
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Thread::from)
            .ok_or_else(|| AppError::NotFound(THREAD_NOT_FOUND.to_string()))
    }
}
