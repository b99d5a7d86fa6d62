//! Application Use Cases
//!
//! One struct per user-facing operation. Each use case validates its input
//! entity, runs the existence and ownership checks against the repositories
//! in order, then performs the mutation or read. The first failing step
//! aborts the operation and its error is returned unchanged.
//!
//! ## Available Use Cases
//!
//! - **AddUserUseCase**, **LoginUserUseCase**, **RefreshAuthenticationUseCase**,
//!   **LogoutUserUseCase**: accounts and tokens
//! - **AddThreadUseCase**, **GetThreadDetailUseCase**: threads
//! - **AddCommentUseCase**, **DeleteCommentUseCase**: comments
//! - **AddReplyUseCase**, **DeleteReplyUseCase**: replies
//! - **ToggleLikeUseCase**: comment likes

use std::sync::Arc;

use crate::application::security::{AuthenticationTokenManager, PasswordHash};
use crate::domain::{
    AuthenticationRepository, CommentRepository, LikeRepository, RepliesRepository,
    ThreadRepository, UserRepository,
};

mod add_comment;
mod add_reply;
mod add_thread;
mod add_user;
mod delete_comment;
mod delete_reply;
mod get_thread_detail;
mod login_user;
mod logout_user;
mod refresh_authentication;
mod toggle_like;

pub use add_comment::AddCommentUseCase;
pub use add_reply::AddReplyUseCase;
pub use add_thread::AddThreadUseCase;
pub use add_user::AddUserUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_reply::DeleteReplyUseCase;
pub use get_thread_detail::GetThreadDetailUseCase;
pub use login_user::LoginUserUseCase;
pub use logout_user::LogoutUserUseCase;
pub use refresh_authentication::RefreshAuthenticationUseCase;
pub use toggle_like::{LikeStatus, ToggleLikeUseCase};

/// Repository handles shared by the use cases.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub authentications: Arc<dyn AuthenticationRepository>,
    pub threads: Arc<dyn ThreadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn RepliesRepository>,
    pub likes: Arc<dyn LikeRepository>,
}

/// Every use case, wired to one set of repositories.
pub struct UseCases {
    pub add_user: AddUserUseCase,
    pub login_user: LoginUserUseCase,
    pub refresh_authentication: RefreshAuthenticationUseCase,
    pub logout_user: LogoutUserUseCase,
    pub add_thread: AddThreadUseCase,
    pub get_thread_detail: GetThreadDetailUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub toggle_like: ToggleLikeUseCase,
}

impl UseCases {
    pub fn new(
        repositories: Repositories,
        password_hash: Arc<dyn PasswordHash>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        let Repositories {
            users,
            authentications,
            threads,
            comments,
            replies,
            likes,
        } = repositories;

        Self {
            add_user: AddUserUseCase::new(users.clone(), password_hash.clone()),
            login_user: LoginUserUseCase::new(
                users.clone(),
                authentications.clone(),
                password_hash,
                token_manager.clone(),
            ),
            refresh_authentication: RefreshAuthenticationUseCase::new(
                authentications.clone(),
                token_manager,
            ),
            logout_user: LogoutUserUseCase::new(authentications),
            add_thread: AddThreadUseCase::new(users.clone(), threads.clone()),
            get_thread_detail: GetThreadDetailUseCase::new(
                threads.clone(),
                comments.clone(),
                replies.clone(),
                likes.clone(),
            ),
            add_comment: AddCommentUseCase::new(users.clone(), threads.clone(), comments.clone()),
            delete_comment: DeleteCommentUseCase::new(threads.clone(), comments.clone()),
            add_reply: AddReplyUseCase::new(
                users.clone(),
                threads.clone(),
                comments.clone(),
                replies.clone(),
            ),
            delete_reply: DeleteReplyUseCase::new(threads, comments.clone(), replies),
            toggle_like: ToggleLikeUseCase::new(users, comments, likes),
        }
    }
}
