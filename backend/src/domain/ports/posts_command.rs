//! Driving port for publishing gossip.

use async_trait::async_trait;

use crate::domain::{Error, NewPost, Post};

/// Domain use-case port for creating posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsCommand: Send + Sync {
    /// Publish a post once author and victim are known to exist and differ.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidReference`] for unknown
    /// users and [`crate::domain::ErrorCode::InvalidRequest`] for
    /// self-referential gossip.
    async fn create_post(&self, submission: NewPost) -> Result<Post, Error>;
}
