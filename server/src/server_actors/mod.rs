pub mod server_actor;
pub mod services;
pub mod storage;
