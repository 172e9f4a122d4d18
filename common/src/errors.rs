use crate::constants::{BAD_REQUEST, INTERNAL_SERVER_ERROR};
use crate::types::exchanges::ErrorResponse;
use actix::MailboxError;
use thiserror::Error;

/// Everything that can make a restaurant query fail.
///
/// Only `InvalidCoordinates` is the caller's fault; the rest surface as
/// server-side failures and abort the whole query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Restaurant {restaurant_id} has an invalid time of day: {value:?}")]
    InvalidTimeOfDay {
        restaurant_id: String,
        value: String,
    },

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Actor mailbox error: {0}")]
    Mailbox(String),
}

impl QueryError {
    pub fn status(&self) -> u16 {
        match self {
            QueryError::InvalidCoordinates { .. } => BAD_REQUEST,
            QueryError::InvalidTimeOfDay { .. }
            | QueryError::Storage(_)
            | QueryError::Mailbox(_) => INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status() == BAD_REQUEST
    }
}

impl From<MailboxError> for QueryError {
    fn from(err: MailboxError) -> Self {
        QueryError::Mailbox(err.to_string())
    }
}

impl From<QueryError> for ErrorResponse {
    fn from(err: QueryError) -> Self {
        ErrorResponse {
            status: err.status(),
            message: err.to_string(),
        }
    }
}
