//! The record handler.
//!
//! # Responsibilities
//! - Dispatch on the inbound HTTP method
//! - Validate the lookup parameter / insert body
//! - Scan the record snapshot for case-insensitive spelling matches
//! - Shape the reply and, on a valid insert, the record to persist
//!
//! # Design Decisions
//! - `handle` is a pure function over (operation, snapshot); the snapshot is
//!   an explicit input and the record-to-persist an explicit output, so the
//!   contract is testable without a server or a store
//! - The unsupported-method arm is the exhaustive-match default, not a
//!   string comparison
//! - The insert reply is optimistic: it is shaped before the store runs

use std::sync::Arc;
use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::http::request::X_REQUEST_ID;
use crate::http::response::{Reply, StatusMessage};
use crate::observability::metrics;
use crate::record::Record;
use crate::store::RecordStore;

/// Shared application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub max_body_bytes: usize,
}

/// One inbound request, reduced to what the handler dispatches on.
#[derive(Debug)]
pub enum Operation {
    /// GET: look up every record whose spelling matches `word`.
    Lookup { word: Option<String> },

    /// POST: insert the submitted record.
    Insert {
        body: Option<Bytes>,
        content_type: Option<String>,
    },

    /// Any other method.
    Unsupported { method: Method },
}

/// What one invocation produces: a reply, plus at most one record to
/// persist.
#[derive(Debug)]
pub struct Outcome {
    pub reply: Reply,
    pub persist: Option<Record>,
}

impl Outcome {
    fn reply_only(reply: Reply) -> Self {
        Self {
            reply,
            persist: None,
        }
    }
}

/// Insert body as submitted. Both fields are optional here so that presence
/// is checked by validation, not by deserialization.
#[derive(Debug, Deserialize)]
struct InsertPayload {
    #[serde(default)]
    spelling: Option<String>,
    #[serde(default, rename = "type")]
    word_type: Option<String>,
}

/// Process one operation against a record snapshot.
pub fn handle(operation: Operation, snapshot: &[Record]) -> Outcome {
    match operation {
        Operation::Lookup { word } => lookup(word, snapshot),
        Operation::Insert { body, content_type } => insert(body, content_type),
        Operation::Unsupported { method } => {
            tracing::warn!(method = %method, "HTTP method not implemented");
            Outcome::reply_only(Reply::empty(StatusCode::METHOD_NOT_ALLOWED))
        }
    }
}

fn lookup(word: Option<String>, snapshot: &[Record]) -> Outcome {
    let word = match word {
        Some(word) if !word.is_empty() => word,
        _ => {
            return Outcome::reply_only(Reply::json(
                StatusCode::BAD_REQUEST,
                &StatusMessage::failure("No `word` parameter is supplied!"),
            ))
        }
    };

    let matches: Vec<&Record> = snapshot
        .iter()
        .filter(|record| record.matches_spelling(&word))
        .collect();

    if matches.is_empty() {
        return Outcome::reply_only(Reply::json(
            StatusCode::NOT_FOUND,
            &StatusMessage::not_found(format!(
                "Word \"{word}\" not found in current database!"
            )),
        ));
    }

    Outcome::reply_only(Reply::json(StatusCode::OK, &matches))
}

fn insert(body: Option<Bytes>, content_type: Option<String>) -> Outcome {
    let record = match body.as_deref().and_then(parse_record) {
        Some(record) => record,
        None => {
            return Outcome::reply_only(Reply::json(
                StatusCode::BAD_REQUEST,
                &StatusMessage::failure("Request body is malformed or no body is supplied!"),
            ))
        }
    };

    if content_type.as_deref() != Some("application/json") {
        return Outcome::reply_only(Reply::json(
            StatusCode::BAD_REQUEST,
            &StatusMessage::failure("Content-Type not supported!"),
        ));
    }

    let reply = Reply::json(
        StatusCode::OK,
        &StatusMessage::success(format!(
            "Word \"{}\" successfully added to the database",
            record.spelling
        )),
    );

    Outcome {
        reply,
        persist: Some(record),
    }
}

/// Parse an insert body into a well-formed record. Absent fields, empty
/// fields, wrong types, and invalid JSON all count as a malformed body.
fn parse_record(bytes: &[u8]) -> Option<Record> {
    let payload: InsertPayload = serde_json::from_slice(bytes).ok()?;
    let spelling = payload.spelling.filter(|s| !s.is_empty())?;
    let word_type = payload.word_type.filter(|s| !s.is_empty())?;
    Some(Record {
        spelling,
        word_type,
    })
}

/// Extract the `word` query parameter. First occurrence wins.
fn word_param(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "word")
        .map(|(_, value)| value.into_owned())
}

/// Axum entry point: adapt the raw request into an [`Operation`], invoke the
/// pure handler against the store's snapshot, and forward the persist slot
/// to the store.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().clone();

    let operation = if method == Method::GET {
        Operation::Lookup {
            word: word_param(request.uri().query()),
        }
    } else if method == Method::POST {
        let content_type = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = match axum::body::to_bytes(request.into_body(), state.max_body_bytes).await {
            Ok(bytes) if !bytes.is_empty() => Some(bytes),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(request_id = %request_id, error = %e, "Failed to read request body");
                None
            }
        };

        Operation::Insert { body, content_type }
    } else {
        Operation::Unsupported { method: method.clone() }
    };

    let snapshot = state.store.snapshot();
    let outcome = handle(operation, &snapshot);

    if let Some(record) = outcome.persist {
        if let Err(e) = state.store.save(record) {
            tracing::error!(request_id = %request_id, error = %e, "Failed to persist record");
        }
    }

    let status = outcome.reply.status;
    tracing::debug!(
        request_id = %request_id,
        method = %method,
        status = status.as_u16(),
        "Request handled"
    );
    metrics::record_request(method.as_str(), status.as_u16(), start_time);

    outcome.reply.into_response()
}
