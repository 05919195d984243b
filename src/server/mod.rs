// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the relay server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Move request parsing
//! - The relay actor and per-client WebSocket sessions

pub mod state;
pub mod router;
pub mod http;
pub mod moves;
pub mod relay;
pub mod ws_error;
