use crate::messages::shared_messages::{ConnectionClosed, MalformedMessage, NetworkMessage};
use actix::dev::ToEnvelope;
use actix::prelude::*;
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, BufReader, ReadHalf};
use tokio::net::TcpStream;

/// Reads JSON lines from a socket and forwards each decoded
/// [`NetworkMessage`] to `destination`.
///
/// Undecodable lines become a local `MalformedMessage` so the owner can
/// answer them; end of stream becomes `ConnectionClosed`, after which the
/// receiver stops.
pub struct TCPReceiver<A: Actor + Handler<NetworkMessage>> {
    remote_addr: SocketAddr,
    reader: Option<BufReader<ReadHalf<TcpStream>>>,
    destination: Addr<A>,
}

impl<A> TCPReceiver<A>
where
    A: Actor + Handler<NetworkMessage>,
{
    pub fn new(reader: ReadHalf<TcpStream>, remote_addr: SocketAddr, destination: Addr<A>) -> Self {
        Self {
            remote_addr,
            reader: Some(BufReader::new(reader)),
            destination,
        }
    }
}

/// Decodes one line. Blank lines yield `None`.
pub fn decode_frame(line: &str) -> Option<NetworkMessage> {
    if line.trim().is_empty() {
        return None;
    }
    Some(
        serde_json::from_str::<NetworkMessage>(line).unwrap_or_else(|e| {
            NetworkMessage::MalformedMessage(MalformedMessage {
                reason: e.to_string(),
            })
        }),
    )
}

impl<A> Actor for TCPReceiver<A>
where
    A: Actor + Handler<NetworkMessage>,
    A::Context: ToEnvelope<A, NetworkMessage>,
{
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let Some(reader) = self.reader.take() else {
            ctx.stop();
            return;
        };
        let addr = self.destination.clone();
        let remote_addr = self.remote_addr;

        ctx.spawn(
            async move {
                let mut lines = reader.lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    if let Some(msg) = decode_frame(&line) {
                        addr.do_send(msg);
                    }
                }
                addr.do_send(NetworkMessage::ConnectionClosed(ConnectionClosed {
                    remote_addr,
                }));
            }
            .into_actor(self)
            .map(|_, _act, ctx| ctx.stop()),
        );
    }
}
