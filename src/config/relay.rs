/// Relay listener configuration.
/// 
/// The port must match the server URL configured on the board clients.
pub const PORT: u16 = 3000;

/// Interface the HTTP server binds to (all interfaces, so LAN clients can reach it).
pub const HOST: &str = "0.0.0.0";

/// Path of the WebSocket endpoint board clients connect to.
pub const WS_PATH: &str = "/ws";

/// Largest WebSocket frame accepted from a client, in bytes (Socket.IO's 1 MB default).
pub const MAX_FRAME_SIZE: usize = 1_000_000;
