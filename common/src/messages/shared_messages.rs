use crate::types::exchanges::{ErrorResponse, GetRestaurantsRequest, GetRestaurantsResponse};
use actix::prelude::*;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Every frame exchanged between the client and the server.
///
/// Frames travel as one JSON object per line, tagged by `"type"`, e.g.
/// `{"type":"GetRestaurants","latitude":28.49,"longitude":77.53}`.
#[derive(Serialize, Deserialize, Debug, Message, Clone, PartialEq)]
#[serde(tag = "type")]
#[rtype(result = "()")]
pub enum NetworkMessage {
    /// Client asks for the restaurants around a position.
    GetRestaurants(GetRestaurantsRequest),
    /// Server answers a successful query.
    Restaurants(GetRestaurantsResponse),
    /// Server answers a failed query.
    Error(ErrorResponse),

    /// A line arrived that could not be decoded. Built locally by the receiver.
    MalformedMessage(MalformedMessage),
    /// The remote end closed the socket. Built locally by the receiver.
    ConnectionClosed(ConnectionClosed),
}

/// Raised by the receiving side when a frame is not valid JSON for
/// [`NetworkMessage`].
#[derive(Serialize, Deserialize, Debug, Message, Clone, PartialEq)]
#[rtype(result = "()")]
pub struct MalformedMessage {
    pub reason: String,
}

/// Notifies that the connection to `remote_addr` has been closed.
#[derive(Serialize, Deserialize, Debug, Message, Clone, PartialEq)]
#[rtype(result = "()")]
pub struct ConnectionClosed {
    pub remote_addr: SocketAddr,
}

/// Tells a network actor to drop its socket half and stop.
#[derive(Message, Debug)]
#[rtype(result = "()")]
pub struct Shutdown;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_frame_is_tagged_by_type() {
        let frame = NetworkMessage::GetRestaurants(GetRestaurantsRequest::new(20.0, 30.0));
        let json = serde_json::to_string(&frame).expect("serializable");
        assert_eq!(
            json,
            r#"{"type":"GetRestaurants","latitude":20.0,"longitude":30.0}"#
        );
    }

    #[test]
    fn decodes_frames_written_by_hand() {
        let frame: NetworkMessage = serde_json::from_str(
            r#"{"type":"GetRestaurants","latitude":28.4900591,"longitude":77.536386,"searchFor":"tamil"}"#,
        )
        .expect("valid frame");

        let NetworkMessage::GetRestaurants(request) = frame else {
            panic!("Expected NetworkMessage::GetRestaurants variant");
        };
        assert_eq!(request.search_for.as_deref(), Some("tamil"));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(serde_json::from_str::<NetworkMessage>(r#"{"type":"PlaceOrder"}"#).is_err());
    }
}
