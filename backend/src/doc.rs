//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] gathers the user, post, and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported by `cargo run --bin
//! openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::posts::CreatePostRequest;
use crate::inbound::http::schemas::{
    AuthorRankingSchema, ErrorCodeSchema, ErrorSchema, PostSchema, UserSchema,
};
use crate::inbound::http::users::{CreateUserRequest, DeleteUserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tagarela API",
        description = "Users gossiping about each other: sign-up, gossip posts, and author rankings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::top_authors,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::victim_posts,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        PostSchema,
        AuthorRankingSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        CreatePostRequest,
        DeleteUserResponse,
    )),
    tags(
        (name = "users", description = "Sign-up, lookup, deletion, and rankings"),
        (name = "posts", description = "Gossip about other users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
