use crate::errors::QueryError;
use crate::types::restaurant::Restaurant;
use crate::utils::is_valid_position;
use serde::{Deserialize, Serialize};

/// Query sent by a client looking for restaurants around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRestaurantsRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Accepted and carried along, but not used for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_for: Option<String>,
}

impl GetRestaurantsRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            search_for: None,
        }
    }

    pub fn with_search(mut self, search_for: impl Into<String>) -> Self {
        self.search_for = Some(search_for.into());
        self
    }

    /// Boundary check run before a request is handed to the query service.
    pub fn validate(&self) -> Result<(), QueryError> {
        if is_valid_position(self.latitude, self.longitude) {
            Ok(())
        } else {
            Err(QueryError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// Restaurants that are open and in range, in backing-store order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRestaurantsResponse {
    pub restaurants: Vec<Restaurant>,
}

impl GetRestaurantsResponse {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }
}

/// Failure reply. `status` follows HTTP semantics: 4xx for the caller's
/// mistakes, 5xx for ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}
