//! # Domain Entities
//!
//! Core domain entities representing the forum's business objects.
//!
//! ## Payload Entities
//!
//! Validated at construction from a [`Payload`](crate::domain::value_objects::Payload):
//!
//! - **RegisterUser** / **UserLogin**: account registration and login
//! - **NewThread**, **NewComment**, **NewReply**, **NewLike**: forum writes
//!
//! ## Detail Entities
//!
//! - **ThreadDetail**, **CommentDetail**, **ReplyDetail**: the read model of
//!   a thread, with deleted content masked
//!
//! ## Repository Traits
//!
//! Each table has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod authentication;
mod comment;
mod like;
mod reply;
mod thread;
mod user;

// Re-export User entities
pub use user::{RegisterUser, RegisteredUser, UserRepository, USERNAME_MAX_LENGTH};

// Re-export Authentication entities
pub use authentication::{AuthenticationRepository, NewAuth, RefreshTokenPayload, UserLogin};

// Re-export Thread entities
pub use thread::{AddedThread, NewThread, Thread, ThreadDetail, ThreadRepository};

// Re-export Comment entities
pub use comment::{
    AddedComment, CommentDetail, CommentRecord, CommentRepository, NewComment,
    DELETED_COMMENT_CONTENT,
};

// Re-export Reply entities
pub use reply::{
    AddedReply, NewReply, RepliesRepository, ReplyDetail, ReplyRecord, DELETED_REPLY_CONTENT,
};

// Re-export Like entities
pub use like::{LikeRepository, NewLike};

#[cfg(test)]
pub use authentication::MockAuthenticationRepository;
#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use like::MockLikeRepository;
#[cfg(test)]
pub use reply::MockRepliesRepository;
#[cfg(test)]
pub use thread::MockThreadRepository;
#[cfg(test)]
pub use user::MockUserRepository;
