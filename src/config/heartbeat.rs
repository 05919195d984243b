/// WebSocket heartbeat configuration.
/// 
/// The server pings every `HEARTBEAT_INTERVAL_SECS` and checks the client's last frame
/// on the same tick, so a silent client is dropped on the first tick after
/// `CLIENT_TIMEOUT_SECS` (at 50s with these values).
pub const HEARTBEAT_INTERVAL_SECS: u64 = 25; // How often the server pings each client.

/// Time without any frame from a client before it is dropped with "ping timeout".
pub const CLIENT_TIMEOUT_SECS: u64 = 45;
