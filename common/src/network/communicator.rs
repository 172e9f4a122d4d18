use crate::messages::shared_messages::{NetworkMessage, Shutdown};
use crate::network::tcp_receiver::TCPReceiver;
use crate::network::tcp_sender::TCPSender;
use actix::prelude::*;
use std::net::SocketAddr;
use tokio::io::split;
use tokio::net::TcpStream;

/// Both halves of one TCP connection: a [`TCPSender`] for outgoing frames
/// and a [`TCPReceiver`] that delivers incoming frames to the owning actor.
#[derive(Debug)]
pub struct Communicator<A>
where
    A: Actor<Context = Context<A>> + Handler<NetworkMessage>,
{
    pub sender: Addr<TCPSender>,
    pub receiver: Addr<TCPReceiver<A>>,
    pub remote_addr: SocketAddr,
}

impl<A> Communicator<A>
where
    A: Actor<Context = Context<A>> + Handler<NetworkMessage>,
{
    pub fn new(tcp_stream: TcpStream, remote_addr: SocketAddr, destination: Addr<A>) -> Self {
        let (read_half, write_half) = split(tcp_stream);
        Self {
            sender: TCPSender::new(write_half).start(),
            receiver: TCPReceiver::new(read_half, remote_addr, destination).start(),
            remote_addr,
        }
    }

    pub fn send(&self, msg: NetworkMessage) {
        self.sender.do_send(msg);
    }

    pub fn shutdown(&self) {
        self.sender.do_send(Shutdown);
    }
}
