//! Shared gossip board service implementing the user and post ports.
//!
//! A single mutex guards the whole [`GossipBoard`], so every operation sees
//! users and posts in a consistent state. Post timestamps come from an
//! injected [`Clock`].

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{PostsCommand, PostsQuery, UsersCommand, UsersQuery};
use crate::domain::{
    AuthorRanking, DeleteUserOutcome, Error, GossipBoard, NewPost, Post, User, UserId, UserName,
    example_board,
};

/// Thread-safe facade over a [`GossipBoard`].
#[derive(Clone)]
pub struct GossipBoardService {
    board: Arc<Mutex<GossipBoard>>,
    clock: Arc<dyn Clock>,
}

impl GossipBoardService {
    /// Wrap an existing board.
    pub fn new(board: GossipBoard, clock: Arc<dyn Clock>) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
            clock,
        }
    }

    /// Service starting from the example users and posts.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::InternalError`] if the seed data
    /// violates a board invariant.
    pub fn seeded(clock: Arc<dyn Clock>) -> Result<Self, Error> {
        Ok(Self::new(example_board()?, clock))
    }

    fn with_board<T>(&self, op: impl FnOnce(&mut GossipBoard) -> T) -> Result<T, Error> {
        let mut guard = self.board.lock().map_err(|_| {
            warn!("gossip board mutex poisoned");
            Error::internal("gossip board lock poisoned")
        })?;
        Ok(op(&mut guard))
    }
}

#[async_trait]
impl UsersCommand for GossipBoardService {
    async fn create_user(&self, name: UserName) -> Result<User, Error> {
        let user = self.with_board(|board| board.create_user(name))??;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<DeleteUserOutcome, Error> {
        let outcome = self.with_board(|board| board.delete_user(id))?;
        info!(user_id = %id, %outcome, "user deletion attempted");
        Ok(outcome)
    }
}

#[async_trait]
impl UsersQuery for GossipBoardService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.with_board(|board| board.all_users())
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error> {
        let user = self.with_board(|board| board.user_by_id(id).cloned())?;
        debug!(user_id = %id, found = user.is_some(), "user lookup");
        Ok(user)
    }

    async fn posts_where_user_is_victim(&self, id: UserId) -> Result<Vec<Post>, Error> {
        self.with_board(|board| board.posts_where_user_is_victim(id))
    }

    async fn top_authors(&self) -> Result<Vec<AuthorRanking>, Error> {
        self.with_board(|board| board.top_authors())
    }
}

#[async_trait]
impl PostsCommand for GossipBoardService {
    async fn create_post(&self, submission: NewPost) -> Result<Post, Error> {
        let created_at = self.clock.utc();
        let result = self.with_board(|board| board.create_post(submission, created_at))?;
        match result {
            Ok(post) => {
                info!(
                    post_id = %post.id(),
                    author_id = %post.author_id(),
                    victim_id = %post.victim_id(),
                    "post created"
                );
                Ok(post)
            }
            Err(err) => {
                debug!(error = %err, "post rejected");
                Err(err.into())
            }
        }
    }
}

#[async_trait]
impl PostsQuery for GossipBoardService {
    async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        self.with_board(|board| board.all_posts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, Gossip};
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    fn fixture_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn user_id(raw: u64) -> UserId {
        UserId::new(raw).expect("user id")
    }

    fn submission(author: u64, victim: u64) -> NewPost {
        NewPost {
            author_id: user_id(author),
            victim_id: user_id(victim),
            gossip: Gossip::new("test").expect("gossip"),
        }
    }

    #[fixture]
    fn service() -> GossipBoardService {
        let clock = Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        });
        GossipBoardService::seeded(clock).expect("seeded service")
    }

    #[rstest]
    #[tokio::test]
    async fn create_post_stamps_clock_time(service: GossipBoardService) {
        let post = service
            .create_post(submission(2, 3))
            .await
            .expect("create post");
        assert_eq!(post.created_at(), fixture_timestamp());
        assert_eq!(post.id().get(), 4);
        assert_eq!(service.list_posts().await.expect("list posts").len(), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn create_post_maps_board_errors(service: GossipBoardService) {
        let err = service
            .create_post(submission(99, 1))
            .await
            .expect_err("unknown author");
        assert_eq!(err.code(), ErrorCode::InvalidReference);
        assert_eq!(err.message(), "Author does not exist");
    }

    #[rstest]
    #[tokio::test]
    async fn clones_share_the_same_board(service: GossipBoardService) {
        let other = service.clone();
        let user = other
            .create_user(UserName::new("Ana").expect("name"))
            .await
            .expect("create user");
        let found = service.find_user(user.id()).await.expect("find user");
        assert_eq!(found, Some(user));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_user_reports_outcomes(service: GossipBoardService) {
        assert_eq!(
            service.delete_user(user_id(1)).await.expect("delete"),
            DeleteUserOutcome::Blocked
        );
        assert_eq!(
            service.delete_user(user_id(9)).await.expect("delete"),
            DeleteUserOutcome::NotFound
        );
        let ana = service
            .create_user(UserName::new("Ana").expect("name"))
            .await
            .expect("create user");
        assert_eq!(
            service.delete_user(ana.id()).await.expect("delete"),
            DeleteUserOutcome::Deleted
        );
    }

    #[rstest]
    #[tokio::test]
    async fn queries_read_through_to_the_board(service: GossipBoardService) {
        let victim_posts = service
            .posts_where_user_is_victim(user_id(1))
            .await
            .expect("victim posts");
        assert_eq!(victim_posts.len(), 2);
        let rankings = service.top_authors().await.expect("top authors");
        assert_eq!(rankings.len(), 3);
        assert_eq!(service.list_users().await.expect("users").len(), 3);
    }

    #[rstest]
    fn poisoned_lock_surfaces_internal_error(service: GossipBoardService) {
        let board = Arc::clone(&service.board);
        let _ = std::thread::spawn(move || {
            let _guard = board.lock().expect("lock board");
            panic!("poison the board");
        })
        .join();
        let err = service
            .with_board(|board| board.all_users())
            .expect_err("poisoned lock");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
