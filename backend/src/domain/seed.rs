//! Example records loaded when the service starts.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Error, GossipBoard, Gossip, NewPost, Post, PostId, User, UserId, UserName};

const SEED_USERS: [(u64, &str); 3] = [(1, "Nelsinho"), (2, "Soninha"), (3, "Leozin")];

struct SeedPost {
    id: u64,
    author_id: u64,
    victim_id: u64,
    gossip: &'static str,
    created_at: (i32, u32, u32, u32, u32),
}

const SEED_POSTS: [SeedPost; 3] = [
    SeedPost {
        id: 1,
        author_id: 1,
        victim_id: 2,
        gossip: "Diz que é Flamenguista, mas acha que o Zico ainda é titular",
        created_at: (2023, 5, 1, 10, 0),
    },
    SeedPost {
        id: 2,
        author_id: 2,
        victim_id: 1,
        gossip: "Diz que é Botafoguense, mas não existem botafoguenses",
        created_at: (2023, 5, 2, 14, 30),
    },
    SeedPost {
        id: 3,
        author_id: 3,
        victim_id: 1,
        gossip: "Diz que é Tricolor, mas não existem tricolores com menos de 60 anos",
        created_at: (2023, 5, 3, 16, 15),
    },
];

// Invalid seed entries surface as internal errors.
fn seed_error(what: &str, err: impl std::fmt::Display) -> Error {
    Error::internal(format!("invalid seed {what}: {err}"))
}

fn seed_timestamp((year, month, day, hour, minute): (i32, u32, u32, u32, u32)) -> Result<DateTime<Utc>, Error> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| seed_error("timestamp", format!("{year}-{month}-{day} {hour}:{minute}")))
}

fn seed_users() -> Result<Vec<User>, Error> {
    SEED_USERS
        .iter()
        .map(|(id, name)| {
            let id = UserId::new(*id).map_err(|err| seed_error("user id", err))?;
            let name = UserName::new(*name).map_err(|err| seed_error("user name", err))?;
            Ok(User::new(id, name))
        })
        .collect()
}

fn seed_posts() -> Result<Vec<Post>, Error> {
    SEED_POSTS
        .iter()
        .map(|seed| {
            let id = PostId::new(seed.id).map_err(|err| seed_error("post id", err))?;
            let submission = NewPost {
                author_id: UserId::new(seed.author_id).map_err(|err| seed_error("author id", err))?,
                victim_id: UserId::new(seed.victim_id).map_err(|err| seed_error("victim id", err))?,
                gossip: Gossip::new(seed.gossip).map_err(|err| seed_error("gossip", err))?,
            };
            Ok(Post::from_submission(id, submission, seed_timestamp(seed.created_at)?))
        })
        .collect()
}

/// Board holding the three example users and their three posts.
///
/// # Examples
/// ```
/// use tagarela::domain::example_board;
///
/// let board = example_board().expect("seed data is valid");
/// assert_eq!(board.all_users().len(), 3);
/// assert_eq!(board.all_posts().len(), 3);
/// ```
pub fn example_board() -> Result<GossipBoard, Error> {
    Ok(GossipBoard::with_records(seed_users()?, seed_posts()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn seed_users_have_expected_names() {
        let board = example_board().expect("seed board");
        let names: Vec<String> = board
            .all_users()
            .into_iter()
            .map(|user| user.name().to_string())
            .collect();
        assert_eq!(names, ["Nelsinho", "Soninha", "Leozin"]);
    }

    #[rstest]
    fn seed_posts_respect_board_invariants() {
        let board = example_board().expect("seed board");
        for post in board.all_posts() {
            assert_ne!(post.author_id(), post.victim_id());
            assert!(board.user_by_id(post.author_id()).is_some());
            assert!(board.user_by_id(post.victim_id()).is_some());
        }
    }

    #[rstest]
    fn seed_timestamps_are_utc() {
        let board = example_board().expect("seed board");
        let stamps: Vec<String> = board
            .all_posts()
            .iter()
            .map(|post| post.created_at().to_rfc3339())
            .collect();
        assert_eq!(
            stamps,
            [
                "2023-05-01T10:00:00+00:00",
                "2023-05-02T14:30:00+00:00",
                "2023-05-03T16:15:00+00:00"
            ]
        );
    }
}
