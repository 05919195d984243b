//! Main entry point for the chessboard relay.
//!
//! Starts the relay actor and launches the HTTP server: a status page, the
//! `/move` trigger, and the WebSocket endpoint the board clients connect to.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use config::relay::{HOST, PORT};
use server::relay::RelayServer;

pub mod config;
mod server;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start the relay actor (owns the connection registry).
    let relay_addr = RelayServer::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(relay_addr));

    // Bind failure (e.g. port in use) propagates and ends the process.
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(crate::server::router::cors_headers())
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((HOST, PORT))?;

    info!("Chessboard server listening on port {}", PORT);
    info!("Visit http://localhost:{}/ in a browser to check.", PORT);

    http_server.run().await
}
