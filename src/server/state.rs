// src/server/state.rs

//! Application state for the relay server.
//!
//! Holds the address of the relay actor, which owns the connection registry.
//! Shared between the HTTP handlers and the WebSocket endpoint.

use actix::Addr;
use crate::server::relay::RelayServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the relay actor (connection registry and broadcast).
    pub relay_addr: Addr<RelayServer>,
}

impl AppState {
    /// Create a new AppState around the given relay address.
    pub fn new(relay_addr: Addr<RelayServer>) -> Self {
        AppState { relay_addr }
    }
}
