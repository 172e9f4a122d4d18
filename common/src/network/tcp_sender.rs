use crate::logger::Logger;
use crate::messages::shared_messages::{NetworkMessage, Shutdown};
use actix::prelude::*;
use colored::Color;
use std::collections::VecDeque;
use tokio::io::{AsyncWriteExt, BufWriter, WriteHalf};
use tokio::net::TcpStream;

/// The `TCPSender` actor serializes [`NetworkMessage`]s as JSON lines and
/// writes them to the remote peer. Frames are queued so they leave in the
/// same order they were handed in, one write at a time.
pub struct TCPSender {
    /// The buffered writer for the TCP stream. `None` while a write is in
    /// flight or after the socket failed.
    pub writer: Option<BufWriter<WriteHalf<TcpStream>>>,
    /// Frames waiting to be written.
    pub queue: VecDeque<NetworkMessage>,
    /// Set by `Shutdown`; the actor stops once the queue is drained.
    pub closing: bool,
    pub logger: Logger,
}

impl TCPSender {
    pub fn new(write_half: WriteHalf<TcpStream>) -> Self {
        Self {
            writer: Some(BufWriter::new(write_half)),
            queue: VecDeque::new(),
            closing: false,
            logger: Logger::new("TCP Sender", Color::BrightBlack),
        }
    }
}

impl Actor for TCPSender {
    type Context = Context<Self>;
}

struct ProcessQueue;

impl Message for ProcessQueue {
    type Result = ();
}

impl Handler<NetworkMessage> for TCPSender {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) {
        if self.closing {
            self.logger.warn(format!("Dropping frame sent after shutdown: {:?}", msg));
            return;
        }
        self.queue.push_back(msg);
        if self.queue.len() == 1 {
            ctx.notify(ProcessQueue);
        }
    }
}

impl Handler<ProcessQueue> for TCPSender {
    type Result = ResponseActFuture<Self, ()>;

    fn handle(&mut self, _msg: ProcessQueue, _ctx: &mut Self::Context) -> Self::Result {
        let Some(msg) = self.queue.front().cloned() else {
            return Box::pin(async {}.into_actor(self));
        };
        let Some(mut writer) = self.writer.take() else {
            return Box::pin(async {}.into_actor(self));
        };

        let fut = async move {
            let serialized = serde_json::to_string(&msg)
                .map_err(|e| format!("Error serializing message: {}", e))?;
            let frame = format!("{}\n", serialized);

            writer
                .write_all(frame.as_bytes())
                .await
                .map_err(|e| format!("Error writing to socket: {}", e))?;
            writer
                .flush()
                .await
                .map_err(|e| format!("Error flushing socket: {}", e))?;

            Ok::<_, String>(writer)
        };

        Box::pin(fut.into_actor(self).map(move |res, act, ctx| match res {
            Ok(writer) => {
                act.writer = Some(writer);
                act.queue.pop_front();
                if !act.queue.is_empty() {
                    ctx.notify(ProcessQueue);
                } else if act.closing {
                    ctx.stop();
                }
            }
            Err(err_msg) => {
                // The writer is gone with the failed future; nothing else can be sent.
                act.queue.clear();
                act.logger.error(err_msg);
                ctx.stop();
            }
        }))
    }
}

impl Handler<Shutdown> for TCPSender {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Self::Context) {
        self.closing = true;
        if self.queue.is_empty() {
            self.writer = None;
            ctx.stop();
        }
    }
}
