/// Main configuration module.
/// 
/// Re-exports submodules for the relay listener and WebSocket heartbeat.
pub mod relay;
pub mod heartbeat;
