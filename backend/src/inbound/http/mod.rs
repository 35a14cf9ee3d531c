//! HTTP inbound adapter exposing the gossip board REST endpoints.

pub mod error;
pub mod health;
pub mod posts;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// JSON extractor configuration shared by every handler.
///
/// Bodies that fail to parse are reported with the standard error envelope
/// instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        validation::invalid_body_error(&err.to_string()).into()
    })
}

/// Register every `/api/v1` handler on `cfg`.
///
/// `top-authors` is registered ahead of `{id}` so it is never parsed as an
/// identifier.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(users::create_user)
        .service(users::list_users)
        .service(users::top_authors)
        .service(users::get_user)
        .service(users::delete_user)
        .service(users::victim_posts)
        .service(posts::create_post)
        .service(posts::list_posts);
}
