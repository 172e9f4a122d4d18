use crate::messages::internal_messages::RequestNearbyRestaurants;
use crate::server_actors::services::nearby_restaurants::NearbyRestaurantsService;
use actix::prelude::*;
use chrono::{Local, NaiveTime};
use colored::Color;
use common::constants::BAD_REQUEST;
use common::errors::QueryError;
use common::logger::Logger;
use common::messages::shared_messages::NetworkMessage;
use common::network::communicator::Communicator;
use common::types::exchanges::{ErrorResponse, GetRestaurantsRequest};
use std::net::SocketAddr;
use tokio::net::TcpStream;
use uuid::Uuid;

/// Source of the wall-clock time a query is evaluated at.
pub type Clock = fn() -> NaiveTime;

pub fn local_time() -> NaiveTime {
    Local::now().time()
}

/// One `Server` actor per client connection. It validates incoming
/// `GetRestaurants` frames, forwards them to the nearby-restaurants service
/// and writes back either the restaurants or an error status.
pub struct Server {
    pub remote_addr: SocketAddr,
    pub communicator: Option<Communicator<Server>>,
    pub nearby_service: Addr<NearbyRestaurantsService>,
    pub clock: Clock,
    pub logger: Logger,
}

impl Server {
    pub fn start_connection(
        stream: TcpStream,
        remote_addr: SocketAddr,
        nearby_service: Addr<NearbyRestaurantsService>,
        clock: Clock,
    ) -> Addr<Self> {
        Server::create(move |ctx| Server {
            remote_addr,
            communicator: Some(Communicator::new(stream, remote_addr, ctx.address())),
            nearby_service,
            clock,
            logger: Logger::new(format!("Server {}", remote_addr), Color::Blue),
        })
    }

    fn reply(&self, msg: NetworkMessage) {
        match &self.communicator {
            Some(communicator) => communicator.send(msg),
            None => self
                .logger
                .warn(format!("No connection left to answer {}", self.remote_addr)),
        }
    }

    fn reply_error(&self, err: QueryError) {
        self.reply(NetworkMessage::Error(ErrorResponse::from(err)));
    }

    fn handle_get_restaurants(&mut self, request: GetRestaurantsRequest, ctx: &mut Context<Self>) {
        let request_id = Uuid::new_v4();
        self.logger.info(format!(
            "[{}] getRestaurants called with {:?}",
            request_id, request
        ));

        if let Err(e) = request.validate() {
            self.logger.warn(format!("[{}] Rejected: {}", request_id, e));
            self.reply_error(e);
            return;
        }

        let query = RequestNearbyRestaurants {
            request,
            current_time: (self.clock)(),
            request_id,
        };

        self.nearby_service
            .send(query)
            .into_actor(self)
            .map(move |res, act, _ctx| match res.map_err(QueryError::from).and_then(|r| r) {
                Ok(response) => {
                    act.logger.info(format!(
                        "[{}] getRestaurants returned {} restaurants",
                        request_id,
                        response.restaurants.len()
                    ));
                    act.reply(NetworkMessage::Restaurants(response));
                }
                Err(e) => {
                    act.logger.error(format!(
                        "[{}] Error occurred while fetching restaurants: {}",
                        request_id, e
                    ));
                    act.reply_error(e);
                }
            })
            .wait(ctx);
    }
}

impl Actor for Server {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("Connection handler started");
    }
}

impl Handler<NetworkMessage> for Server {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            NetworkMessage::GetRestaurants(request) => self.handle_get_restaurants(request, ctx),
            NetworkMessage::MalformedMessage(malformed) => {
                self.logger
                    .warn(format!("Malformed frame: {}", malformed.reason));
                self.reply(NetworkMessage::Error(ErrorResponse {
                    status: BAD_REQUEST,
                    message: format!("Malformed request: {}", malformed.reason),
                }));
            }
            NetworkMessage::ConnectionClosed(closed) => {
                self.logger
                    .info(format!("Connection closed by {}", closed.remote_addr));
                if let Some(communicator) = self.communicator.take() {
                    communicator.shutdown();
                }
                ctx.stop();
            }
            other => {
                self.logger
                    .warn(format!("Unexpected frame from client: {:?}", other));
                self.reply(NetworkMessage::Error(ErrorResponse {
                    status: BAD_REQUEST,
                    message: "Only GetRestaurants requests are accepted".to_string(),
                }));
            }
        }
    }
}
