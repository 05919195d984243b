//! Centralized helpers for WebSocket and HTTP error responses.
//!
//! WebSocket errors travel as regular event frames (`{"event":"error","data":{...}}`),
//! HTTP input errors go back as plain-text 400 responses.
use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use serde_json::json;
use std::fmt;

/// Body returned when `GET /move` is missing a square.
pub const MOVE_USAGE: &str = "Usage: /move?start=E2&end=E4";

/// Formats a WebSocket error event as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_FRAME").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. connection id).
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    json!({
        "event": "error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    })
    .to_string()
}

/// Rejected `GET /move` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveQueryError {
    MissingStart,
    MissingEnd,
}

impl fmt::Display for MoveQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MOVE_USAGE)
    }
}

impl ResponseError for MoveQueryError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(MOVE_USAGE)
    }
}
