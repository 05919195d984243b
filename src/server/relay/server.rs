//! Relay actor: owns the live connection registry and fans events out to it.
use actix::prelude::*;
use std::collections::HashMap;
use log::{debug, info};

use crate::server::relay::messages::{
    Broadcast, Connect, ConnectionCount, ConnectionId, Disconnect, MovePieceDone, ServerEvent,
};

/// Single relay for the whole process. Sessions register on connect and
/// deregister on disconnect; nothing else keeps a client list.
#[derive(Default)]
pub struct RelayServer {
    sessions: HashMap<ConnectionId, Recipient<ServerEvent>>,
}

impl RelayServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-effort fan-out. A session that already stopped silently misses the event.
    fn broadcast(&self, event: &ServerEvent) {
        debug!(
            "[IO] Broadcast {} to {} client(s)",
            event.name(),
            self.sessions.len()
        );
        for addr in self.sessions.values() {
            addr.do_send(event.clone());
        }
    }
}

impl Actor for RelayServer {
    type Context = Context<Self>;
}

impl Handler<Connect> for RelayServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
        info!("[IO] Client connected: {}", msg.id);
        self.sessions.insert(msg.id, msg.addr);
    }
}

impl Handler<Disconnect> for RelayServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        self.sessions.remove(&msg.id);
        info!("[IO] Client disconnected: {} reason: {}", msg.id, msg.reason);
    }
}

impl Handler<Broadcast> for RelayServer {
    type Result = ();

    fn handle(&mut self, msg: Broadcast, _: &mut Context<Self>) -> Self::Result {
        self.broadcast(&msg.0);
    }
}

impl Handler<MovePieceDone> for RelayServer {
    type Result = ();

    fn handle(&mut self, msg: MovePieceDone, _: &mut Context<Self>) -> Self::Result {
        info!("[IO] move_piece_done from {}: {}", msg.id, msg.data);
    }
}

impl Handler<ConnectionCount> for RelayServer {
    type Result = usize;

    fn handle(&mut self, _: ConnectionCount, _: &mut Context<Self>) -> Self::Result {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::moves::PieceMove;
    use crate::server::relay::messages::DisconnectReason;
    use crate::server::relay::probe::{Probe, StopProbe, connect_probe, drain};
    use serde_json::json;
    use uuid::Uuid;

    fn e2e4() -> ServerEvent {
        ServerEvent::MovePiece(PieceMove::new("E2", "E4"))
    }

    #[actix_web::test]
    async fn test_broadcast_reaches_every_client() {
        let relay = RelayServer::new().start();
        let (_, first) = connect_probe(&relay).await;
        let (_, second) = connect_probe(&relay).await;

        relay.do_send(Broadcast(e2e4()));

        assert_eq!(drain(&relay, &first).await, vec![e2e4()]);
        assert_eq!(drain(&relay, &second).await, vec![e2e4()]);
    }

    #[actix_web::test]
    async fn test_broadcast_without_clients_is_noop() {
        let relay = RelayServer::new().start();
        relay.do_send(Broadcast(e2e4()));
        assert_eq!(relay.send(ConnectionCount).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_disconnected_client_gets_nothing() {
        let relay = RelayServer::new().start();
        let (gone_id, gone) = connect_probe(&relay).await;
        let (_, stays) = connect_probe(&relay).await;
        assert_eq!(relay.send(ConnectionCount).await.unwrap(), 2);

        relay.do_send(Disconnect { id: gone_id, reason: DisconnectReason::ClientClose });
        relay.do_send(Broadcast(e2e4()));

        assert!(drain(&relay, &gone).await.is_empty());
        assert_eq!(drain(&relay, &stays).await, vec![e2e4()]);
        assert_eq!(relay.send(ConnectionCount).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_stopped_client_does_not_break_broadcast() {
        let relay = RelayServer::new().start();
        let (_, alive) = connect_probe(&relay).await;
        let dead = Probe::default().start();
        relay.do_send(Connect { id: Uuid::new_v4(), addr: dead.clone().recipient() });
        dead.send(StopProbe).await.unwrap();

        relay.do_send(Broadcast(e2e4()));
        relay.do_send(Broadcast(e2e4()));

        assert_eq!(drain(&relay, &alive).await, vec![e2e4(), e2e4()]);
    }

    #[actix_web::test]
    async fn test_ack_leaves_registry_untouched() {
        let relay = RelayServer::new().start();
        let (id, probe) = connect_probe(&relay).await;

        relay.do_send(MovePieceDone { id, data: json!({"start": "E2", "end": "E4"}) });
        relay.do_send(MovePieceDone { id: Uuid::new_v4(), data: json!(null) });

        assert_eq!(relay.send(ConnectionCount).await.unwrap(), 1);
        assert!(drain(&relay, &probe).await.is_empty());
    }
}
