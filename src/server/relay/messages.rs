use actix::prelude::*;
use serde::{Serialize, Deserialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::server::moves::PieceMove;

/// Event broadcast when a move is requested over HTTP.
pub const MOVE_PIECE: &str = "move_piece";
/// Event a board client sends once it finished executing a move.
pub const MOVE_PIECE_DONE: &str = "move_piece_done";

/// Identifier assigned to each WebSocket connection.
pub type ConnectionId = Uuid;

// Server -> client events
#[derive(Message, Serialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Sent once to a freshly connected client with its connection id.
    Connect { sid: ConnectionId },
    MovePiece(PieceMove),
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "connect",
            Self::MovePiece(_) => MOVE_PIECE,
        }
    }
}

/// Raw client frame: `{"event": "...", "data": ...}`.
///
/// `data` is kept as arbitrary JSON; a missing `data` becomes `null`.
#[derive(Deserialize, Debug, PartialEq)]
pub struct ClientFrame {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

pub fn decode_client_frame(text: &str) -> Result<ClientFrame, serde_json::Error> {
    serde_json::from_str(text)
}

/// Why a connection went away, worded like Socket.IO disconnect reasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisconnectReason {
    /// The client sent a Close frame.
    ClientClose,
    /// The stream ended without a Close frame.
    TransportClose,
    /// The WebSocket protocol failed.
    TransportError,
    /// No frame from the client within the heartbeat timeout.
    PingTimeout,
}

impl DisconnectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientClose => "client namespace disconnect",
            Self::TransportClose => "transport close",
            Self::TransportError => "transport error",
            Self::PingTimeout => "ping timeout",
        }
    }
}

impl fmt::Display for DisconnectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A session registers with the relay.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub id: ConnectionId,
    pub addr: Recipient<ServerEvent>,
}

/// A session left the relay.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub id: ConnectionId,
    pub reason: DisconnectReason,
}

/// Fan an event out to every connected session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Broadcast(pub ServerEvent);

/// Acknowledgement from a board client. Logged only.
#[derive(Message)]
#[rtype(result = "()")]
pub struct MovePieceDone {
    pub id: ConnectionId,
    pub data: Value,
}

/// Number of registered sessions.
#[derive(Message)]
#[rtype(result = "usize")]
pub struct ConnectionCount;
