//! WebSocket session for a single board client.
//!
//! The actor registers itself with the relay when it starts and deregisters when it
//! stops. It forwards `move_piece_done` acknowledgements to the relay and writes
//! every event the relay sends it to the socket. A heartbeat drops clients that go quiet.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, error, warn};
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::messages::{
    decode_client_frame, Connect, ConnectionId, Disconnect, DisconnectReason, MovePieceDone,
    ServerEvent, MOVE_PIECE_DONE,
};
use super::server::RelayServer;
use crate::config::heartbeat::{CLIENT_TIMEOUT_SECS, HEARTBEAT_INTERVAL_SECS};
use crate::config::relay::MAX_FRAME_SIZE;
use crate::server::ws_error::ws_error_message;

pub struct ClientSession {
    pub id: ConnectionId,
    pub relay_addr: Addr<RelayServer>,
    /// Last time any frame arrived from the client.
    last_seen: Instant,
    /// First cause recorded wins; reported to the relay on stop.
    disconnect_reason: Option<DisconnectReason>,
}

impl ClientSession {
    pub fn new(relay_addr: Addr<RelayServer>) -> Self {
        Self {
            id: Uuid::new_v4(),
            relay_addr,
            last_seen: Instant::now(),
            disconnect_reason: None,
        }
    }

    fn disconnect(&mut self, reason: DisconnectReason, ctx: &mut ws::WebsocketContext<Self>) {
        self.disconnect_reason.get_or_insert(reason);
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(Duration::from_secs(HEARTBEAT_INTERVAL_SECS), |act, ctx| {
            if act.last_seen.elapsed() > Duration::from_secs(CLIENT_TIMEOUT_SECS) {
                act.disconnect(DisconnectReason::PingTimeout, ctx);
                return;
            }
            ctx.ping(b"");
        });
    }

    fn handle_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        match decode_client_frame(text) {
            Ok(frame) if frame.event == MOVE_PIECE_DONE => {
                self.relay_addr.do_send(MovePieceDone {
                    id: self.id,
                    data: frame.data,
                });
            }
            Ok(frame) => {
                debug!("[IO] Ignoring event '{}' from {}", frame.event, self.id);
            }
            Err(e) => {
                warn!("[IO] Invalid frame from {}: {}", self.id, e);
                ctx.text(ws_error_message(
                    "INVALID_FRAME",
                    "Expected a JSON object like {\"event\":\"move_piece_done\",\"data\":...}",
                    Some(&self.id.to_string()),
                ));
            }
        }
    }
}

impl Actor for ClientSession {
    type Context = ws::WebsocketContext<Self>;

    /// Registers the session with the relay and hands the client its id.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.start_heartbeat(ctx);
        self.relay_addr.do_send(Connect {
            id: self.id,
            addr: ctx.address().recipient(),
        });
        ctx.notify(ServerEvent::Connect { sid: self.id });
    }

    /// Deregisters the session from the relay.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.relay_addr.do_send(Disconnect {
            id: self.id,
            reason: self.disconnect_reason.unwrap_or(DisconnectReason::TransportClose),
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ClientSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                warn!("[IO] Protocol error from {}: {}", self.id, e);
                self.disconnect(DisconnectReason::TransportError, ctx);
                return;
            }
        };
        self.last_seen = Instant::now();

        match msg {
            ws::Message::Text(text) => self.handle_text(&text, ctx),
            ws::Message::Ping(bytes) => ctx.pong(&bytes),
            ws::Message::Pong(_) => (),
            ws::Message::Close(reason) => {
                debug!("[IO] Close frame from {}: {:?}", self.id, reason);
                ctx.close(reason);
                self.disconnect(DisconnectReason::ClientClose, ctx);
            }
            ws::Message::Binary(_) => {
                debug!("[IO] Ignoring binary frame from {}", self.id);
            }
            ws::Message::Continuation(_) | ws::Message::Nop => (),
        }
    }

    fn finished(&mut self, ctx: &mut Self::Context) {
        self.disconnect(DisconnectReason::TransportClose, ctx);
    }
}

impl Handler<ServerEvent> for ClientSession {
    type Result = ();

    /// Writes a relay event to the socket.
    fn handle(&mut self, msg: ServerEvent, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                // Serialization error: close the connection.
                error!("[IO] Failed to serialize {} for {}: {}", msg.name(), self.id, e);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                self.disconnect(DisconnectReason::TransportError, ctx);
            }
        }
    }
}

/// WebSocket endpoint for board clients. No query parameters are required.
/// Client frames up to `MAX_FRAME_SIZE` bytes are accepted.
pub async fn ws_relay(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::WsResponseBuilder::new(ClientSession::new(data.relay_addr.clone()), &req, stream)
        .frame_size(MAX_FRAME_SIZE)
        .start()
}
