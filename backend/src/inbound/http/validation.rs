//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, UserId};

/// Path id rejection used by `GET` and `DELETE /user/{id}`.
pub(crate) const INVALID_ID_MESSAGE: &str = "Invalid ID: must be a positive integer";
/// Path id rejection used by `GET /user/{id}/victim-posts`.
pub(crate) const INVALID_VICTIM_ID_MESSAGE: &str = "Invalid ID";
pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Missing fields in request body";
pub(crate) const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

/// Reject a body in which some required fields are absent or empty.
pub(crate) fn missing_fields_error(fields: &[FieldName]) -> Error {
    let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
    Error::invalid_request(MISSING_FIELDS_MESSAGE).with_details(json!({
        "fields": names,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Reject a body that could not be decoded at all.
pub(crate) fn invalid_body_error(reason: &str) -> Error {
    Error::invalid_request(INVALID_BODY_MESSAGE).with_details(json!({
        "reason": reason,
        "code": ErrorCode::InvalidBody.as_str(),
    }))
}

/// Parse a path segment as a user identifier, failing with `message`.
///
/// Only plain base-10 positive integers are accepted.
pub(crate) fn parse_user_id(raw: &str, message: &'static str) -> Result<UserId, Error> {
    raw.parse::<UserId>().map_err(|_| {
        Error::invalid_request(message).with_details(json!({
            "field": "id",
            "value": raw,
            "code": ErrorCode::InvalidId.as_str(),
        }))
    })
}
