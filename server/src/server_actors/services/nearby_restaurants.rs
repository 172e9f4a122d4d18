use crate::messages::internal_messages::{GetAllRestaurants, RequestNearbyRestaurants};
use crate::server_actors::services::radius_policy::RadiusPolicy;
use crate::server_actors::services::restaurant_filter::find_restaurants_close_by;
use crate::server_actors::storage::Storage;
use actix::prelude::*;
use chrono::NaiveTime;
use colored::Color;
use common::errors::QueryError;
use common::logger::Logger;
use common::types::exchanges::{GetRestaurantsRequest, GetRestaurantsResponse};
use common::types::restaurant::RestaurantRecord;

/// Answers a query against an already fetched snapshot of records: derive
/// the serving radius from `current_time`, then keep the restaurants that are
/// open and inside it.
pub fn find_restaurants(
    radius_policy: &RadiusPolicy,
    records: &[RestaurantRecord],
    request: &GetRestaurantsRequest,
    current_time: NaiveTime,
) -> Result<GetRestaurantsResponse, QueryError> {
    let serving_radius_km = radius_policy.radius_for(current_time);
    let restaurants = find_restaurants_close_by(
        records,
        request.latitude,
        request.longitude,
        current_time,
        serving_radius_km,
    )?;
    Ok(GetRestaurantsResponse::new(restaurants))
}

/// The `NearbyRestaurantsService` actor handles client queries for
/// restaurants around a position.
///
/// ## Responsibilities:
/// - Retrieve all restaurants from the storage, fresh for every query.
/// - Pick the serving radius for the time of the query.
/// - Filter restaurants that are open and within that radius.
pub struct NearbyRestaurantsService {
    /// The address of the Storage actor to fetch restaurants from.
    pub storage_addr: Addr<Storage>,
    /// Peak/normal radius schedule.
    pub radius_policy: RadiusPolicy,
    /// Logger instance for events
    pub logger: Logger,
}

impl NearbyRestaurantsService {
    pub fn new(storage_addr: Addr<Storage>, radius_policy: RadiusPolicy) -> Self {
        NearbyRestaurantsService {
            storage_addr,
            radius_policy,
            logger: Logger::new("Nearby Restaurants Service", Color::Green),
        }
    }
}

impl Actor for NearbyRestaurantsService {
    type Context = Context<Self>;
}

impl Handler<RequestNearbyRestaurants> for NearbyRestaurantsService {
    type Result = ResponseActFuture<Self, Result<GetRestaurantsResponse, QueryError>>;

    fn handle(&mut self, msg: RequestNearbyRestaurants, _ctx: &mut Self::Context) -> Self::Result {
        let RequestNearbyRestaurants {
            request,
            current_time,
            request_id,
        } = msg;

        self.logger.info(format!(
            "[{}] Serving radius at {} is {} km",
            request_id,
            current_time.format("%H:%M:%S"),
            self.radius_policy.radius_for(current_time)
        ));

        Box::pin(
            self.storage_addr
                .send(GetAllRestaurants)
                .into_actor(self)
                .map(move |res, act, _ctx| -> Result<GetRestaurantsResponse, QueryError> {
                    let records = res??;
                    let response =
                        find_restaurants(&act.radius_policy, &records, &request, current_time)?;
                    act.logger.info(format!(
                        "[{}] Found {} of {} restaurants open near ({}, {})",
                        request_id,
                        response.restaurants.len(),
                        records.len(),
                        request.latitude,
                        request.longitude
                    ));
                    Ok(response)
                }),
        )
    }
}
