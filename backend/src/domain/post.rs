//! Gossip post data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entity_id::define_entity_id;
use crate::domain::{Error, UserId};

define_entity_id! {
    /// Stable post identifier, assigned independently of user identifiers.
    PostId
}

/// Validation errors returned by the post value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    EmptyGossip,
}

impl fmt::Display for PostValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGossip => write!(f, "Gossip is required"),
        }
    }
}

impl std::error::Error for PostValidationError {}

impl From<PostValidationError> for Error {
    fn from(value: PostValidationError) -> Self {
        match value {
            PostValidationError::EmptyGossip => Error::invalid_request(value.to_string())
                .with_details(json!({ "field": "gossip", "code": "empty_gossip" })),
        }
    }
}

/// Free-text content of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gossip(String);

impl Gossip {
    /// Validate and construct [`Gossip`]; blank text is rejected.
    pub fn new(text: impl Into<String>) -> Result<Self, PostValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(PostValidationError::EmptyGossip);
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for Gossip {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Gossip> for String {
    fn from(value: Gossip) -> Self {
        value.0
    }
}

impl TryFrom<String> for Gossip {
    type Error = PostValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A piece of gossip written by one user about another.
///
/// ## Invariants
/// - `author_id != victim_id`.
/// - Both ids referenced existing users when the post was created.
///
/// Posts are create-only: nothing mutates or removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    id: PostId,
    author_id: UserId,
    victim_id: UserId,
    gossip: Gossip,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Assemble a post from an accepted submission.
    pub(crate) fn from_submission(id: PostId, submission: NewPost, created_at: DateTime<Utc>) -> Self {
        let NewPost {
            author_id,
            victim_id,
            gossip,
        } = submission;
        Self {
            id,
            author_id,
            victim_id,
            gossip,
            created_at,
        }
    }

    /// Post identifier.
    pub fn id(&self) -> PostId {
        self.id
    }

    /// User who wrote the post.
    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    /// User the gossip is about.
    pub fn victim_id(&self) -> UserId {
        self.victim_id
    }

    /// Gossip text.
    pub fn gossip(&self) -> &Gossip {
        &self.gossip
    }

    /// Time the post was accepted.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether `user_id` appears on either side of the post.
    pub fn involves(&self, user_id: UserId) -> bool {
        self.author_id == user_id || self.victim_id == user_id
    }
}

/// Submission for a new post; references are checked by the gossip board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author_id: UserId,
    pub victim_id: UserId,
    pub gossip: Gossip,
}

/// Number of posts written by one author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRanking {
    pub author_id: UserId,
    pub count: usize,
}
