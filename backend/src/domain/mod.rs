//! Domain model and services for the gossip board.
//!
//! Purpose: hold the users and posts, enforce the rules that tie them
//! together, and expose the driving ports used by inbound adapters.
//!
//! Public surface:
//! - [`GossipBoard`]: synchronous aggregate owning users and posts.
//! - [`GossipBoardService`]: shared, thread-safe implementation of the ports.
//! - [`User`], [`Post`] and their identifier and value types.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.

pub(crate) mod entity_id;
pub mod error;
pub mod gossip_board;
pub mod gossip_board_service;
pub mod ports;
pub mod post;
pub mod seed;
pub mod trace_id;
pub mod user;

pub use self::entity_id::InvalidEntityId;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::gossip_board::{BoardError, DeleteUserOutcome, GossipBoard, TOP_AUTHORS_LIMIT};
pub use self::gossip_board_service::GossipBoardService;
pub use self::post::{AuthorRanking, Gossip, NewPost, Post, PostId, PostValidationError};
pub use self::seed::example_board;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserName, UserValidationError};
