//! Shared building blocks for the nearby-restaurants server and its client:
//! wire types, network actors, logging and the geo/time helpers.

pub mod constants;
pub mod errors;
pub mod logger;
pub mod messages;
pub mod network;
pub mod types;
pub mod utils;
