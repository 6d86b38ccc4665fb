//! Reply shaping.
//!
//! # Responsibilities
//! - Define the response envelope bodies (failure, not-found, success)
//! - Carry a status code plus an optional pre-serialized JSON body
//! - Convert replies into Axum responses
//!
//! # Design Decisions
//! - Bodies are serialized at shaping time so the handler stays pure and
//!   replies can be compared byte-for-byte in tests
//! - A reply without a body sets no Content-Type header

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Envelope for non-array response bodies.
///
/// `status` is the machine-readable outcome tag; `message` is the
/// human-readable description.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}

impl StatusMessage {
    /// Client-input error envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: "failure",
            message: message.into(),
        }
    }

    /// Absent-lookup envelope.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: "not-found",
            message: message.into(),
        }
    }

    /// Successful-write envelope.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}

/// An HTTP-shaped reply produced by the record handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    /// Serialized JSON body, if the reply carries one.
    pub body: Option<String>,
}

impl Reply {
    /// Shape a reply carrying `body` serialized as JSON.
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        let body = serde_json::to_string(body).expect("reply body serializes to JSON");
        Self {
            status,
            body: Some(body),
        }
    }

    /// Shape a bodyless reply.
    pub fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (
                self.status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            None => self.status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let reply = Reply::json(
            StatusCode::BAD_REQUEST,
            &StatusMessage::failure("No `word` parameter is supplied!"),
        );
        assert_eq!(
            reply.body.as_deref(),
            Some(r#"{"status":"failure","message":"No `word` parameter is supplied!"}"#)
        );
    }

    #[test]
    fn test_empty_reply_has_no_body() {
        let reply = Reply::empty(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(reply.body.is_none());
    }
}
