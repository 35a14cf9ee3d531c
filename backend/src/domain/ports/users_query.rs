//! Driving port for user-facing queries.
//!
//! Covers the user listing plus the two post-derived views exposed under the
//! user resource: posts targeting a user and the author ranking.

use async_trait::async_trait;

use crate::domain::{AuthorRanking, Error, Post, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered user in creation order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// The user with `id`, or `None` when no such user exists.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error>;

    /// Posts in which `id` is the victim, oldest first.
    async fn posts_where_user_is_victim(&self, id: UserId) -> Result<Vec<Post>, Error>;

    /// The most prolific authors, at most five.
    async fn top_authors(&self) -> Result<Vec<AuthorRanking>, Error>;
}
