use actix::prelude::*;
use chrono::NaiveTime;
use common::errors::QueryError;
use common::types::exchanges::{GetRestaurantsRequest, GetRestaurantsResponse};
use common::types::restaurant::RestaurantRecord;
use uuid::Uuid;

/////////////////////////////////////////////////////////////////////
// Storage messages
/////////////////////////////////////////////////////////////////////

/// Asks the `Storage` actor for the complete, unfiltered restaurant collection.
#[derive(Message, Debug)]
#[rtype(result = "Result<Vec<RestaurantRecord>, QueryError>")]
pub struct GetAllRestaurants;

/////////////////////////////////////////////////////////////////////
// Nearby restaurants service messages
/////////////////////////////////////////////////////////////////////

/// Asks the `NearbyRestaurantsService` for the restaurants open and in range.
///
/// ## Contents
/// - `request`: The validated client query.
/// - `current_time`: Wall-clock time at which the query is evaluated.
/// - `request_id`: Correlates the log lines of one query.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<GetRestaurantsResponse, QueryError>")]
pub struct RequestNearbyRestaurants {
    pub request: GetRestaurantsRequest,
    pub current_time: NaiveTime,
    pub request_id: Uuid,
}
