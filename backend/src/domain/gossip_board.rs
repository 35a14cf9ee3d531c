//! In-memory gossip board owning both users and posts.
//!
//! Users and posts reference each other in both directions: creating a post
//! needs to look users up, and deleting a user needs to know whether any post
//! mentions them. Keeping both collections on one type lets those checks run
//! against a single consistent view, and lets callers guard the whole board
//! with one lock.
//!
//! The board is synchronous and knows nothing about clocks or locking; see
//! [`crate::domain::GossipBoardService`] for the shared, thread-safe wrapper.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::{AuthorRanking, Error, NewPost, Post, PostId, User, UserId, UserName};

/// Maximum number of entries returned by [`GossipBoard::top5_authors`].
pub const TOP_AUTHORS_LIMIT: usize = 5;

/// Result of a user deletion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteUserOutcome {
    /// The user existed, was unreferenced, and has been removed.
    Deleted,
    /// No user has the requested identifier.
    NotFound,
    /// The user is the author or victim of at least one post.
    Blocked,
}

impl DeleteUserOutcome {
    /// Whether the user was removed.
    pub fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl fmt::Display for DeleteUserOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Deleted => "deleted",
            Self::NotFound => "not_found",
            Self::Blocked => "blocked",
        };
        f.write_str(label)
    }
}

/// Failures raised while mutating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The post author is not a registered user.
    #[error("Author does not exist")]
    UnknownAuthor(UserId),
    /// The post victim is not a registered user.
    #[error("Victim does not exist")]
    UnknownVictim(UserId),
    /// A user tried to gossip about themselves.
    #[error("Author and victim cannot be the same")]
    SelfReference(UserId),
    /// No identifier above the current maximum is representable.
    #[error("{entity} identifiers exhausted")]
    IdsExhausted { entity: &'static str },
}

impl From<BoardError> for Error {
    fn from(value: BoardError) -> Self {
        let message = value.to_string();
        match value {
            BoardError::UnknownAuthor(id) => Error::invalid_reference(message).with_details(json!({
                "field": "authorId",
                "value": id,
                "code": "unknown_author",
            })),
            BoardError::UnknownVictim(id) => Error::invalid_reference(message).with_details(json!({
                "field": "victimId",
                "value": id,
                "code": "unknown_victim",
            })),
            BoardError::SelfReference(id) => Error::invalid_request(message).with_details(json!({
                "field": "victimId",
                "value": id,
                "code": "self_reference",
            })),
            BoardError::IdsExhausted { .. } => Error::internal(message),
        }
    }
}

/// Users, posts, and the rules tying them together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GossipBoard {
    users: Vec<User>,
    posts: Vec<Post>,
}

impl GossipBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from existing records, kept in the given order.
    ///
    /// The records are trusted as-is; use this for seed data and tests.
    pub fn with_records(users: Vec<User>, posts: Vec<Post>) -> Self {
        Self { users, posts }
    }

    /// Register a new user with the next free identifier.
    pub fn create_user(&mut self, name: UserName) -> Result<User, BoardError> {
        let id = UserId::next_after(self.users.iter().map(User::id))
            .ok_or(BoardError::IdsExhausted { entity: "user" })?;
        let user = User::new(id, name);
        self.users.push(user.clone());
        Ok(user)
    }

    /// Snapshot of every user in insertion order.
    pub fn all_users(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Look a user up by identifier.
    pub fn user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Remove a user unless a post still references them.
    ///
    /// The reference check runs first, so an unknown id that some post still
    /// mentions reports [`DeleteUserOutcome::Blocked`].
    pub fn delete_user(&mut self, id: UserId) -> DeleteUserOutcome {
        if self.has_posts(id) {
            return DeleteUserOutcome::Blocked;
        }
        match self.users.iter().position(|user| user.id() == id) {
            Some(index) => {
                self.users.remove(index);
                DeleteUserOutcome::Deleted
            }
            None => DeleteUserOutcome::NotFound,
        }
    }

    /// Posts in which `user_id` is the victim.
    pub fn posts_where_user_is_victim(&self, user_id: UserId) -> Vec<Post> {
        self.posts_by_victim(user_id)
    }

    /// Most prolific authors; see [`GossipBoard::top5_authors`].
    pub fn top_authors(&self) -> Vec<AuthorRanking> {
        self.top5_authors()
    }

    /// Record a post after checking author, victim, and self-reference in
    /// that order.
    pub fn create_post(
        &mut self,
        submission: NewPost,
        created_at: DateTime<Utc>,
    ) -> Result<Post, BoardError> {
        if self.user_by_id(submission.author_id).is_none() {
            return Err(BoardError::UnknownAuthor(submission.author_id));
        }
        if self.user_by_id(submission.victim_id).is_none() {
            return Err(BoardError::UnknownVictim(submission.victim_id));
        }
        if submission.author_id == submission.victim_id {
            return Err(BoardError::SelfReference(submission.author_id));
        }

        let id = PostId::next_after(self.posts.iter().map(Post::id))
            .ok_or(BoardError::IdsExhausted { entity: "post" })?;
        let post = Post::from_submission(id, submission, created_at);
        self.posts.push(post.clone());
        Ok(post)
    }

    /// Snapshot of every post in insertion order.
    pub fn all_posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    /// Whether any post names `user_id` as author or victim.
    pub fn has_posts(&self, user_id: UserId) -> bool {
        self.posts.iter().any(|post| post.involves(user_id))
    }

    /// Posts whose victim is `user_id`, in insertion order.
    pub fn posts_by_victim(&self, user_id: UserId) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.victim_id() == user_id)
            .cloned()
            .collect()
    }

    /// Up to [`TOP_AUTHORS_LIMIT`] authors ranked by post count.
    ///
    /// Sorted by count descending; equal counts are ordered by ascending
    /// author id.
    pub fn top5_authors(&self) -> Vec<AuthorRanking> {
        let mut counts: BTreeMap<UserId, usize> = BTreeMap::new();
        for post in &self.posts {
            *counts.entry(post.author_id()).or_default() += 1;
        }

        let mut rankings: Vec<AuthorRanking> = counts
            .into_iter()
            .map(|(author_id, count)| AuthorRanking { author_id, count })
            .collect();
        rankings.sort_by(|left, right| {
            right
                .count
                .cmp(&left.count)
                .then(left.author_id.cmp(&right.author_id))
        });
        rankings.truncate(TOP_AUTHORS_LIMIT);
        rankings
    }
}
