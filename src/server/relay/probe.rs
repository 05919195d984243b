//! Test stand-in for a WebSocket session: records every event the relay sends it.
use actix::prelude::*;
use uuid::Uuid;

use crate::server::relay::RelayServer;
use crate::server::relay::messages::{Connect, ConnectionCount, ConnectionId, ServerEvent};

#[derive(Default)]
pub struct Probe {
    received: Vec<ServerEvent>,
}

impl Actor for Probe {
    type Context = Context<Self>;
}

impl Handler<ServerEvent> for Probe {
    type Result = ();

    fn handle(&mut self, msg: ServerEvent, _: &mut Context<Self>) -> Self::Result {
        self.received.push(msg);
    }
}

#[derive(Message)]
#[rtype(result = "Vec<ServerEvent>")]
pub struct TakeReceived;

impl Handler<TakeReceived> for Probe {
    type Result = MessageResult<TakeReceived>;

    fn handle(&mut self, _: TakeReceived, _: &mut Context<Self>) -> Self::Result {
        MessageResult(std::mem::take(&mut self.received))
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct StopProbe;

impl Handler<StopProbe> for Probe {
    type Result = ();

    fn handle(&mut self, _: StopProbe, ctx: &mut Context<Self>) -> Self::Result {
        ctx.stop();
    }
}

/// Starts a probe and registers it with the relay under a fresh id.
pub async fn connect_probe(relay: &Addr<RelayServer>) -> (ConnectionId, Addr<Probe>) {
    let id = Uuid::new_v4();
    let probe = Probe::default().start();
    relay.do_send(Connect { id, addr: probe.clone().recipient() });
    relay.send(ConnectionCount).await.unwrap();
    (id, probe)
}

/// Everything the probe received so far.
///
/// The `ConnectionCount` round-trip guarantees the relay handled every message
/// queued before this call, so its fan-out is already in the probe's mailbox.
pub async fn drain(relay: &Addr<RelayServer>, probe: &Addr<Probe>) -> Vec<ServerEvent> {
    relay.send(ConnectionCount).await.unwrap();
    probe.send(TakeReceived).await.unwrap()
}
