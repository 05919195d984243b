//! HTTP and WebSocket routing configuration.
//!
//! Two plain HTTP endpoints (status page and move trigger) and the WebSocket
//! endpoint board clients stay connected to.

use actix_web::{middleware::DefaultHeaders, web};
use crate::config::relay::WS_PATH;
use crate::server::http::{index, relay_move};
use crate::server::relay::session::ws_relay;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/move", web::get().to(relay_move))
        .service(
            web::resource(WS_PATH)
                .to(ws_relay)
        );
}

/// Lets LAN pages and devices on any origin reach the relay.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", "*"))
}
