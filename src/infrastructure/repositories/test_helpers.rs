//! Database fixtures for the PostgreSQL repository tests.
//!
//! These tests only run with `cargo test -- --ignored` against the database
//! named by `DATABASE_URL`. Every fixture uses a fresh random suffix so tests
//! can share one database without cleaning tables.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::shared::id_generator::IdGenerator;

/// Always yields the same suffix.
pub struct FixedIdGenerator(String);

impl FixedIdGenerator {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// Connect to the test database and apply migrations.
pub async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPool::connect(&url).await.expect("Failed to connect");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, &uuid::Uuid::new_v4().simple().to_string()[..12])
}

pub async fn add_user(pool: &PgPool, id: &str) -> String {
    let username = format!("u_{}", id.replace('-', "_"));
    sqlx::query("INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, 'secret', 'Dicoding Indonesia')")
        .bind(id)
        .bind(&username)
        .execute(pool)
        .await
        .expect("Failed to insert user");
    username
}

pub async fn add_thread(pool: &PgPool, id: &str, owner: &str) {
    sqlx::query("INSERT INTO threads (id, title, body, owner) VALUES ($1, 'sebuah thread', 'sebuah body thread', $2)")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await
        .expect("Failed to insert thread");
}

pub async fn add_comment(
    pool: &PgPool,
    id: &str,
    thread_id: &str,
    owner: &str,
    date: DateTime<Utc>,
    is_deleted: bool,
) {
    sqlx::query(
        "INSERT INTO comments (id, thread_id, content, owner, date, is_deleted) VALUES ($1, $2, 'sebuah comment', $3, $4, $5)",
    )
    .bind(id)
    .bind(thread_id)
    .bind(owner)
    .bind(date)
    .bind(is_deleted)
    .execute(pool)
    .await
    .expect("Failed to insert comment");
}

pub async fn add_reply(
    pool: &PgPool,
    id: &str,
    comment_id: &str,
    owner: &str,
    date: DateTime<Utc>,
    is_deleted: bool,
) {
    sqlx::query(
        "INSERT INTO replies (id, comment_id, content, owner, date, is_deleted) VALUES ($1, $2, 'sebuah balasan', $3, $4, $5)",
    )
    .bind(id)
    .bind(comment_id)
    .bind(owner)
    .bind(date)
    .bind(is_deleted)
    .execute(pool)
    .await
    .expect("Failed to insert reply");
}

pub async fn is_comment_deleted(pool: &PgPool, id: &str) -> bool {
    let (deleted,): (bool,) = sqlx::query_as("SELECT is_deleted FROM comments WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to read comment");
    deleted
}
