//! Move requests received over HTTP.
//!
//! A move is a pair of board squares (`E2`, `E4`, ...). Squares are never validated:
//! they are trimmed, uppercased and relayed as-is, malformed or not.
use serde::Serialize;
use std::fmt;

use crate::server::ws_error::MoveQueryError;

/// A move as broadcast to the board clients.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PieceMove {
    pub start: String,
    pub end: String,
    /// Optional capture hint, forwarded untouched apart from trimming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<String>,
}

impl PieceMove {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: normalize_square(start),
            end: normalize_square(end),
            capture: None,
        }
    }

    pub fn with_capture(mut self, capture: Option<String>) -> Self {
        self.capture = capture
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }
}

impl fmt::Display for PieceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)?;
        if let Some(capture) = &self.capture {
            write!(f, ", capture: {}", capture)?;
        }
        Ok(())
    }
}

/// Trims surrounding whitespace and uppercases the square.
pub fn normalize_square(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Parses the raw query string of `GET /move`.
///
/// `start` and `end` are required and must be non-empty once decoded.
/// The first occurrence of a repeated key wins.
pub fn parse_move_query(query: &str) -> Result<PieceMove, MoveQueryError> {
    let mut start: Option<String> = None;
    let mut end: Option<String> = None;
    let mut capture: Option<String> = None;

    for kv in query.split('&').filter(|kv| !kv.is_empty()) {
        let (key, value) = kv.split_once('=').unwrap_or((kv, ""));
        let slot = match decode_component(key).as_str() {
            "start" => &mut start,
            "end" => &mut end,
            "capture" => &mut capture,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(decode_component(value));
        }
    }

    let start = start
        .filter(|s| !s.is_empty())
        .ok_or(MoveQueryError::MissingStart)?;
    let end = end
        .filter(|e| !e.is_empty())
        .ok_or(MoveQueryError::MissingEnd)?;

    Ok(PieceMove::new(&start, &end).with_capture(capture))
}

/// Form-style decoding: `+` is a space, then percent escapes.
/// Invalid UTF-8 escapes keep their percent form; `+` is still a space.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| spaced.clone())
}
