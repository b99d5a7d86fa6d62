//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! This module provides concrete implementations of the repository traits
//! defined in the domain layer. Each repository handles data access for
//! a single table.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - User accounts
//! - **PgAuthenticationRepository** - Stored refresh tokens
//! - **PgThreadRepository** - Threads
//! - **PgCommentRepository** - Comments with soft delete
//! - **PgRepliesRepository** - Replies with soft delete
//! - **PgLikeRepository** - Comment likes
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use forum_api::infrastructure::repositories::postgres_repositories;
//! use forum_api::shared::id_generator::RandomIdGenerator;
//!
//! let repositories = postgres_repositories(pool, Arc::new(RandomIdGenerator::default()));
//! ```

pub mod authentication_repository;
pub mod comment_repository;
pub mod like_repository;
pub mod replies_repository;
pub mod thread_repository;
pub mod user_repository;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::Repositories;
use crate::shared::id_generator::IdGenerator;

pub use authentication_repository::PgAuthenticationRepository;
pub use comment_repository::PgCommentRepository;
pub use like_repository::PgLikeRepository;
pub use replies_repository::PgRepliesRepository;
pub use thread_repository::PgThreadRepository;
pub use user_repository::PgUserRepository;

/// Build every PostgreSQL repository over one pool.
pub fn postgres_repositories(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Repositories {
    Repositories {
        users: Arc::new(PgUserRepository::new(pool.clone(), id_generator.clone())),
        authentications: Arc::new(PgAuthenticationRepository::new(pool.clone())),
        threads: Arc::new(PgThreadRepository::new(pool.clone(), id_generator.clone())),
        comments: Arc::new(PgCommentRepository::new(pool.clone(), id_generator.clone())),
        replies: Arc::new(PgRepliesRepository::new(pool.clone(), id_generator.clone())),
        likes: Arc::new(PgLikeRepository::new(pool, id_generator)),
    }
}

/// Name of the violated foreign key constraint, if `error` is a foreign key violation.
pub(crate) fn violated_foreign_key(error: &sqlx::Error) -> Option<String> {
    match error {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            db_err.constraint().map(str::to_string)
        }
        _ => None,
    }
}
