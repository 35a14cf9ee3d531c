//! Tests for post API handlers.

use super::*;
use crate::domain::ports::{MockPostsCommand, MockPostsQuery, MockUsersCommand, MockUsersQuery};
use crate::domain::{GossipBoardService, PostId, UserName};
use crate::inbound::http::configure;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        fixture_timestamp().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixture_timestamp()
    }
}

#[fixture]
fn seeded_state() -> HttpState {
    let service = GossipBoardService::seeded(Arc::new(FixtureClock)).expect("seeded service");
    HttpState::from_service(service)
}

async fn send(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/v1").configure(configure)),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

fn post_request(payload: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/v1/post")
        .set_json(payload)
}

#[rstest]
#[actix_web::test]
async fn create_post_returns_created_post(seeded_state: HttpState) {
    let (status, body) = send(
        seeded_state,
        post_request(json!({ "authorId": 1, "victimId": 3, "gossip": "test" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 4,
            "authorId": 1,
            "victimId": 3,
            "gossip": "test",
            "createdAt": "2024-06-01T12:00:00Z"
        })
    );
}

#[rstest]
#[case(json!({ "victimId": 2, "gossip": "x" }), json!(["authorId"]))]
#[case(json!({ "authorId": 0, "victimId": 2, "gossip": "x" }), json!(["authorId"]))]
#[case(json!({ "authorId": 1, "victimId": null, "gossip": "x" }), json!(["victimId"]))]
#[case(json!({ "authorId": 1, "victimId": 2, "gossip": "" }), json!(["gossip"]))]
#[case(json!({}), json!(["authorId", "victimId", "gossip"]))]
#[actix_web::test]
async fn create_post_reports_missing_fields(
    seeded_state: HttpState,
    #[case] payload: Value,
    #[case] fields: Value,
) {
    let (status, body) = send(seeded_state, post_request(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Missing fields in request body");
    assert_eq!(body["details"]["fields"], fields);
}

#[rstest]
#[case(json!({ "authorId": 99, "victimId": 1, "gossip": "x" }), "invalid_reference", "Author does not exist")]
#[case(json!({ "authorId": 1, "victimId": 99, "gossip": "x" }), "invalid_reference", "Victim does not exist")]
#[case(json!({ "authorId": 1, "victimId": 1, "gossip": "x" }), "invalid_request", "Author and victim cannot be the same")]
#[case(json!({ "authorId": -1, "victimId": 2, "gossip": "x" }), "invalid_reference", "Author does not exist")]
#[case(json!({ "authorId": 1, "victimId": -2, "gossip": "x" }), "invalid_reference", "Victim does not exist")]
#[case(json!({ "authorId": 99, "victimId": -2, "gossip": "x" }), "invalid_reference", "Author does not exist")]
#[case(json!({ "authorId": 1, "victimId": 2, "gossip": "  " }), "invalid_request", "Gossip is required")]
#[case(json!({ "authorId": "1", "victimId": 2, "gossip": "x" }), "invalid_request", "Invalid request body")]
#[actix_web::test]
async fn create_post_rejections_are_bad_requests(
    seeded_state: HttpState,
    #[case] payload: Value,
    #[case] code: &str,
    #[case] message: &str,
) {
    let (status, body) = send(seeded_state, post_request(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], code);
    assert_eq!(body["message"], message);
}

#[rstest]
#[actix_web::test]
async fn rejected_posts_are_not_stored(seeded_state: HttpState) {
    let state = seeded_state.clone();
    let (status, _) = send(
        seeded_state,
        post_request(json!({ "authorId": 2, "victimId": 2, "gossip": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, body) = send(state, actix_test::TestRequest::get().uri("/api/v1/post")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[rstest]
#[actix_web::test]
async fn create_post_forwards_validated_submission() {
    let mut posts = MockPostsCommand::new();
    posts
        .expect_create_post()
        .withf(|submission| {
            submission.author_id.get() == 5
                && submission.victim_id.get() == 6
                && submission.gossip.as_ref() == "fofoca"
        })
        .times(1)
        .return_once(|submission| Ok(Post::from_submission(PostId::FIRST, submission, fixture_timestamp())));
    let state = HttpState::new(
        Arc::new(MockUsersCommand::new()),
        Arc::new(MockUsersQuery::new()),
        Arc::new(posts),
        Arc::new(MockPostsQuery::new()),
    );

    let (status, body) = send(
        state,
        post_request(json!({ "authorId": 5, "victimId": 6, "gossip": "fofoca" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
}

#[rstest]
#[case(json!({ "authorId": 99, "victimId": 1, "gossip": "   " }))]
#[case(json!({ "authorId": 1, "victimId": 99, "gossip": "\t" }))]
#[case(json!({ "authorId": 1, "victimId": 1, "gossip": " " }))]
#[actix_web::test]
async fn blank_gossip_is_rejected_before_reference_checks(#[case] payload: Value) {
    // Mocks without expectations panic if the handler reaches the board.
    let state = HttpState::new(
        Arc::new(MockUsersCommand::new()),
        Arc::new(MockUsersQuery::new()),
        Arc::new(MockPostsCommand::new()),
        Arc::new(MockPostsQuery::new()),
    );

    let (status, body) = send(state, post_request(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Gossip is required");
    assert_eq!(body["details"]["field"], "gossip");
}

#[rstest]
#[actix_web::test]
async fn list_posts_includes_new_posts(seeded_state: HttpState) {
    let state = seeded_state.clone();
    seeded_state
        .users
        .create_user(UserName::new("Ana").expect("name"))
        .await
        .expect("create user");
    let (status, _) = send(
        seeded_state,
        post_request(json!({ "authorId": 1, "victimId": 4, "gossip": "test" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(state, actix_test::TestRequest::get().uri("/api/v1/post")).await;
    let victims: Vec<u64> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|post| post["victimId"].as_u64())
        .collect();
    assert_eq!(victims, [2, 1, 1, 4]);
}
