//! Post API handlers.
//!
//! ```text
//! POST /api/v1/post {"authorId":1,"victimId":2,"gossip":"..."}
//! GET  /api/v1/post
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{BoardError, Error, Gossip, NewPost, Post, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PostSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_fields_error};

const AUTHOR_ID: FieldName = FieldName::new("authorId");
const VICTIM_ID: FieldName = FieldName::new("victimId");
const GOSSIP: FieldName = FieldName::new("gossip");

/// Request body for `POST /api/v1/post`.
///
/// Every field is required; ids of zero and empty gossip count as missing.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[schema(example = 1)]
    pub author_id: Option<i64>,
    #[schema(example = 2)]
    pub victim_id: Option<i64>,
    #[schema(example = "Diz que é Botafoguense, mas não existem botafoguenses")]
    pub gossip: Option<String>,
}

struct PresentFields {
    author_id: i64,
    victim_id: i64,
    gossip: String,
}

impl CreatePostRequest {
    fn into_present_fields(self) -> Result<PresentFields, Error> {
        let author_id = self.author_id.filter(|id| *id != 0);
        let victim_id = self.victim_id.filter(|id| *id != 0);
        let gossip = self.gossip.filter(|text| !text.is_empty());
        match (author_id, victim_id, gossip) {
            (Some(author_id), Some(victim_id), Some(gossip)) => Ok(PresentFields {
                author_id,
                victim_id,
                gossip,
            }),
            (author_id, victim_id, gossip) => {
                let missing: Vec<FieldName> = [
                    (author_id.is_none(), AUTHOR_ID),
                    (victim_id.is_none(), VICTIM_ID),
                    (gossip.is_none(), GOSSIP),
                ]
                .into_iter()
                .filter_map(|(absent, field)| absent.then_some(field))
                .collect();
                Err(missing_fields_error(&missing))
            }
        }
    }
}

/// Convert a non-zero raw id; `None` means it was negative.
fn as_user_id(raw: i64) -> Option<UserId> {
    u64::try_from(raw).ok().and_then(|raw| UserId::new(raw).ok())
}

fn negative_reference(field: FieldName, raw: i64) -> Error {
    let (message, code) = if field == AUTHOR_ID {
        ("Author does not exist", "unknown_author")
    } else {
        ("Victim does not exist", "unknown_victim")
    };
    Error::invalid_reference(message).with_details(json!({
        "field": field.as_str(),
        "value": raw,
        "code": code,
    }))
}

/// Publish gossip about another user.
#[utoipa::path(
    post,
    path = "/api/v1/post",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostSchema),
        (status = 400, description = "Missing fields, unknown author or victim, or self-reference", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/post")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let fields = payload.into_inner().into_present_fields()?;
    let gossip = Gossip::new(fields.gossip)?;
    let author_id =
        as_user_id(fields.author_id).ok_or_else(|| negative_reference(AUTHOR_ID, fields.author_id))?;
    let Some(victim_id) = as_user_id(fields.victim_id) else {
        // The author check still comes first.
        if state.users_query.find_user(author_id).await?.is_none() {
            return Err(BoardError::UnknownAuthor(author_id).into());
        }
        return Err(negative_reference(VICTIM_ID, fields.victim_id));
    };

    let post = state
        .posts
        .create_post(NewPost {
            author_id,
            victim_id,
            gossip,
        })
        .await?;
    Ok(HttpResponse::Created().json(post))
}

/// List every post in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/post",
    responses(
        (status = 200, description = "Posts", body = [PostSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/post")]
pub async fn list_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Post>>> {
    Ok(web::Json(state.posts_query.list_posts().await?))
}

#[cfg(test)]
mod tests;
