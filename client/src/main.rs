mod client_actors;

use crate::client_actors::client::{Client, QueryOutcome};
use common::constants::{BASE_PORT, SERVER_IP_ADDRESS, TIMEOUT_SECONDS};
use common::types::exchanges::GetRestaurantsRequest;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::oneshot;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <latitude> <longitude> [searchFor]", program);
    std::process::exit(2);
}

#[actix::main]
async fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage(&args[0]);
    }

    let (Ok(latitude), Ok(longitude)) = (args[1].parse::<f64>(), args[2].parse::<f64>()) else {
        usage(&args[0]);
    };
    let mut request = GetRestaurantsRequest::new(latitude, longitude);
    if let Some(search_for) = args.get(3) {
        request = request.with_search(search_for.clone());
    }

    let server_addr: SocketAddr = env::var("SERVER_ADDRESS")
        .unwrap_or_else(|_| format!("{}:{}", SERVER_IP_ADDRESS, BASE_PORT))
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let stream = TcpStream::connect(server_addr).await?;
    let (done_tx, done_rx) = oneshot::channel();
    let _client = Client::start_query(stream, server_addr, request, done_tx);

    let outcome = tokio::time::timeout(Duration::from_secs(TIMEOUT_SECONDS), done_rx).await;
    let code = match outcome {
        Ok(Ok(QueryOutcome::Answered)) => 0,
        Ok(Ok(QueryOutcome::Failed(_))) => 1,
        Ok(Ok(QueryOutcome::Disconnected)) | Ok(Err(_)) => {
            eprintln!("Connection to {} lost", server_addr);
            1
        }
        Err(_) => {
            eprintln!("No answer from {} after {}s", server_addr, TIMEOUT_SECONDS);
            1
        }
    };
    std::process::exit(code);
}
