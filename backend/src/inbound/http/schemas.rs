//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers below mirror their JSON shape and register under the domain
//! type's name via `#[schema(as = ...)]`.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The request names a user that does not exist.
    #[schema(rename = "invalid_reference")]
    InvalidReference,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_reference")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Author does not exist")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Positive user identifier.
    #[schema(minimum = 1, example = 1)]
    id: u64,
    /// Name given at sign-up.
    #[schema(example = "Nelsinho")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::Post`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Post, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PostSchema {
    /// Positive post identifier.
    #[schema(minimum = 1, example = 1)]
    id: u64,
    /// User who wrote the gossip.
    #[schema(minimum = 1, example = 1)]
    author_id: u64,
    /// User the gossip is about.
    #[schema(minimum = 1, example = 2)]
    victim_id: u64,
    /// Free-text content.
    #[schema(example = "Diz que é Flamenguista, mas acha que o Zico ainda é titular")]
    gossip: String,
    /// Creation time, RFC 3339 in UTC.
    #[schema(value_type = String, format = DateTime, example = "2023-05-01T10:00:00Z")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::AuthorRanking`].
#[derive(ToSchema)]
#[schema(as = crate::domain::AuthorRanking, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AuthorRankingSchema {
    #[schema(minimum = 1, example = 1)]
    author_id: u64,
    /// Number of posts written by the author.
    #[schema(example = 3)]
    count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "invalid_reference", "not_found", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }

    #[test]
    fn post_schema_matches_wire_names() {
        assert_eq!(PostSchema::name(), "crate.domain.Post");
        let schema_json = schema_to_json::<PostSchema>();
        for field in ["authorId", "victimId", "gossip", "createdAt"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn ranking_schema_matches_wire_names() {
        let schema_json = schema_to_json::<AuthorRankingSchema>();
        assert!(schema_json.contains("authorId"));
        assert!(schema_json.contains("count"));
    }
}
