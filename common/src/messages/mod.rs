pub mod shared_messages;

pub use shared_messages::*;
