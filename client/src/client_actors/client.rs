use crate::client_actors::ui_handler::{render_error, render_restaurants};
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::messages::shared_messages::NetworkMessage;
use common::network::communicator::Communicator;
use common::types::exchanges::GetRestaurantsRequest;
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tokio::sync::oneshot;

/// How a one-shot query ended.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Answered,
    Failed(u16),
    Disconnected,
}

/// Sends a single `GetRestaurants` request as soon as it starts, prints
/// the answer and reports the outcome through `done`.
pub struct Client {
    pub request: GetRestaurantsRequest,
    pub communicator: Communicator<Client>,
    pub done: Option<oneshot::Sender<QueryOutcome>>,
    pub logger: Logger,
}

impl Client {
    pub fn start_query(
        stream: TcpStream,
        server_addr: SocketAddr,
        request: GetRestaurantsRequest,
        done: oneshot::Sender<QueryOutcome>,
    ) -> Addr<Self> {
        Client::create(move |ctx| Client {
            request,
            communicator: Communicator::new(stream, server_addr, ctx.address()),
            done: Some(done),
            logger: Logger::new("Client", Color::Cyan),
        })
    }

    fn finish(&mut self, outcome: QueryOutcome, ctx: &mut Context<Self>) {
        if let Some(done) = self.done.take() {
            let _ = done.send(outcome);
        }
        self.communicator.shutdown();
        ctx.stop();
    }
}

impl Actor for Client {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Looking for restaurants near ({}, {})",
            self.request.latitude, self.request.longitude
        ));
        self.communicator
            .send(NetworkMessage::GetRestaurants(self.request.clone()));
    }
}

impl Handler<NetworkMessage> for Client {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) {
        match msg {
            NetworkMessage::Restaurants(response) => {
                println!("{}", render_restaurants(&response.restaurants));
                self.finish(QueryOutcome::Answered, ctx);
            }
            NetworkMessage::Error(error) => {
                eprintln!("{}", render_error(&error));
                self.finish(QueryOutcome::Failed(error.status), ctx);
            }
            NetworkMessage::ConnectionClosed(_) => {
                self.logger.warn("Server closed the connection before answering");
                self.finish(QueryOutcome::Disconnected, ctx);
            }
            other => {
                self.logger
                    .warn(format!("Ignoring unexpected frame: {:?}", other));
            }
        }
    }
}
