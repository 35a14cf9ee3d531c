//! Domain ports for the hexagonal boundary.
//!
//! The HTTP adapter depends only on these traits; the in-memory
//! [`crate::domain::GossipBoardService`] implements all of them.

mod posts_command;
mod posts_query;
mod users_command;
mod users_query;

#[cfg(test)]
pub use posts_command::MockPostsCommand;
pub use posts_command::PostsCommand;
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use posts_query::PostsQuery;
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
