//! Driving port for user mutations.
//!
//! Inbound adapters register and remove users through this port. Removal
//! reports a [`DeleteUserOutcome`] so callers can tell a missing user from one
//! that is still referenced by gossip.

use async_trait::async_trait;

use crate::domain::{DeleteUserOutcome, Error, User, UserId, UserName};

/// Domain use-case port for creating and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user under the next free identifier.
    async fn create_user(&self, name: UserName) -> Result<User, Error>;

    /// Delete a user unless a post still names them as author or victim.
    async fn delete_user(&self, id: UserId) -> Result<DeleteUserOutcome, Error>;
}
