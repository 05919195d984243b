pub mod server;
pub mod session;
pub mod messages;

#[cfg(test)]
pub mod probe;

pub use server::RelayServer;
