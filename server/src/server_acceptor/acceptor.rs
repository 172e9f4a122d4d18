use crate::server_actors::server_actor::{Clock, Server, local_time};
use crate::server_actors::services::nearby_restaurants::NearbyRestaurantsService;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Accepts TCP connections and hands each one to its own [`Server`] actor.
pub struct Acceptor {
    pub addr: SocketAddr,
    pub nearby_service: Addr<NearbyRestaurantsService>,
    pub clock: Clock,
    pub logger: Logger,
}

impl Acceptor {
    pub fn new(addr: SocketAddr, nearby_service: Addr<NearbyRestaurantsService>) -> Self {
        Self {
            addr,
            nearby_service,
            clock: local_time,
            logger: Logger::new("Acceptor", Color::Magenta),
        }
    }

    /// Evaluates every query at the time returned by `clock` instead of the
    /// local wall clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn start(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        self.logger
            .info(format!("Acceptor started, listening on {}", self.addr));
        self.accept_connections(listener).await
    }

    pub async fn accept_connections(&self, listener: TcpListener) -> std::io::Result<()> {
        loop {
            match listener.accept().await {
                Ok((stream, client_addr)) => {
                    self.logger
                        .info(format!("Accepted connection from {}", client_addr));
                    Server::start_connection(
                        stream,
                        client_addr,
                        self.nearby_service.clone(),
                        self.clock,
                    );
                }
                Err(e) => {
                    self.logger
                        .warn(format!("Failed to accept connection: {}", e));
                }
            }
        }
    }
}
