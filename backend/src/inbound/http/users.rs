//! User API handlers.
//!
//! ```text
//! POST   /api/v1/user {"name":"Ana"}
//! GET    /api/v1/user
//! GET    /api/v1/user/top-authors
//! GET    /api/v1/user/{id}
//! DELETE /api/v1/user/{id}
//! GET    /api/v1/user/{id}/victim-posts
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{AuthorRanking, DeleteUserOutcome, Error, Post, User, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AuthorRankingSchema, ErrorSchema, PostSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{INVALID_ID_MESSAGE, INVALID_VICTIM_ID_MESSAGE, parse_user_id};

pub(crate) const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub(crate) const USER_HAS_POSTS_MESSAGE: &str = "User has related posts and cannot be deleted";
pub(crate) const USER_DELETED_MESSAGE: &str = "User deleted successfully";

/// Request body for `POST /api/v1/user`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Required; blank names are rejected.
    #[schema(example = "Ana")]
    pub name: Option<String>,
}

/// Confirmation returned by a successful deletion.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/v1/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Name is required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let name = UserName::new(payload.into_inner().name.unwrap_or_default())?;
    let user = state.users.create_user(name).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/v1/user",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/user")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users_query.list_users().await?))
}

/// Up to five authors ranked by number of posts.
#[utoipa::path(
    get,
    path = "/api/v1/user/top-authors",
    responses(
        (status = 200, description = "Author ranking", body = [AuthorRankingSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "topAuthors"
)]
#[get("/user/top-authors")]
pub async fn top_authors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<AuthorRanking>>> {
    Ok(web::Json(state.users_query.top_authors().await?))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    params(("id" = u64, Path, description = "Positive user identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Invalid ID", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path, INVALID_ID_MESSAGE)?;
    state
        .users_query
        .find_user(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
}

/// Delete a user that no post mentions.
#[utoipa::path(
    delete,
    path = "/api/v1/user/{id}",
    params(("id" = u64, Path, description = "Positive user identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 400, description = "Invalid ID, or the user still has posts", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let id = parse_user_id(&path, INVALID_ID_MESSAGE)?;
    match state.users.delete_user(id).await? {
        DeleteUserOutcome::Deleted => Ok(web::Json(DeleteUserResponse {
            message: USER_DELETED_MESSAGE.to_owned(),
        })),
        DeleteUserOutcome::NotFound => Err(Error::not_found(USER_NOT_FOUND_MESSAGE)),
        DeleteUserOutcome::Blocked => Err(Error::invalid_request(USER_HAS_POSTS_MESSAGE)
            .with_details(json!({ "userId": id, "code": "user_has_posts" }))),
    }
}

/// Posts in which the user is the victim, oldest first.
///
/// Unknown users simply have no posts.
#[utoipa::path(
    get,
    path = "/api/v1/user/{id}/victim-posts",
    params(("id" = u64, Path, description = "Positive user identifier")),
    responses(
        (status = 200, description = "Posts about the user", body = [PostSchema]),
        (status = 400, description = "Invalid ID", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "victimPosts"
)]
#[get("/user/{id}/victim-posts")]
pub async fn victim_posts(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Post>>> {
    let id = parse_user_id(&path, INVALID_VICTIM_ID_MESSAGE)?;
    Ok(web::Json(state.users_query.posts_where_user_is_victim(id).await?))
}
