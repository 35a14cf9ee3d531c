//! Driving port for reading posts.

use async_trait::async_trait;

use crate::domain::{Error, Post};

/// Domain use-case port for listing posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Every post in creation order.
    async fn list_posts(&self) -> Result<Vec<Post>, Error>;
}
