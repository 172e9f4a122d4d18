mod config;
mod messages;
mod repository;
mod server_acceptor;
mod server_actors;

use crate::config::Config;
use crate::messages::internal_messages::GetAllRestaurants;
use crate::repository::JsonFileRepository;
use crate::server_acceptor::acceptor::Acceptor;
use crate::server_actors::services::nearby_restaurants::NearbyRestaurantsService;
use crate::server_actors::services::radius_policy::RadiusPolicy;
use crate::server_actors::storage::Storage;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use tokio::signal::ctrl_c;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let logger = Logger::new("Main", Color::Cyan);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            logger.error(format!("Environment misconfigured: {}", e));
            std::process::exit(1);
        }
    };

    let repository = JsonFileRepository::new(&config.restaurants_file);
    logger.info(format!(
        "Serving restaurants from {}",
        repository.path().display()
    ));
    let storage = Storage::new(Box::new(repository)).start();

    // A broken data file is reported at startup but does not stop the server:
    // the file is read again on every query.
    match storage.send(GetAllRestaurants).await {
        Ok(Ok(records)) => logger.info(format!("{} restaurants available", records.len())),
        Ok(Err(e)) => logger.warn(format!("Restaurant data not readable yet: {}", e)),
        Err(e) => logger.error(format!("Storage unreachable: {}", e)),
    }

    let nearby_service =
        NearbyRestaurantsService::new(storage, RadiusPolicy::new(config.radius.clone())).start();
    let acceptor = Acceptor::new(config.address, nearby_service);

    tokio::select! {
        result = acceptor.start() => result?,
        _ = ctrl_c() => {
            logger.info("Ctrl-C received, shutting down...");
            System::current().stop();
        }
    }
    Ok(())
}
