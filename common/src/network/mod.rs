pub mod communicator;
pub mod tcp_receiver;
pub mod tcp_sender;
