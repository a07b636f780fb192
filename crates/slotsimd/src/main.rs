//! SlotSim Daemon - serves the storage gas visualization over HTTP

mod handler;
mod http;

use anyhow::Result;
use bytes::BytesMut;
use clap::Parser;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

use slotsim::{AccessStats, StorageSim};

use crate::handler::ActionHandler;
use crate::http::{Request, Response};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Health check mode (for Docker)
    #[arg(long)]
    health: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    // Health check
    if args.health {
        match TcpStream::connect(&args.bind).await {
            Ok(_) => {
                println!("OK");
                std::process::exit(0);
            }
            Err(_) => {
                eprintln!("FAILED");
                std::process::exit(1);
            }
        }
    }

    info!("Starting SlotSim Daemon v{}", env!("CARGO_PKG_VERSION"));
    info!("Binding to {}", args.bind);

    let sim = Arc::new(RwLock::new(StorageSim::new()));
    let stats = Arc::new(AccessStats::new());

    let listener = TcpListener::bind(&args.bind).await?;
    info!("Server listening on {}", args.bind);

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║        Storage Gas Simulator Ready!          ║");
    println!("╚══════════════════════════════════════════════╝");
    println!("\n🌐 Open in a browser:  http://{}/", args.bind);
    println!("\n⛽ Actions:");
    println!("   Store:  http://{}/store?key=5&value=100", args.bind);
    println!("   Load:   http://{}/load?key=5", args.bind);
    println!("   Clear:  http://{}/clear", args.bind);
    println!("   State:  http://{}/state  (JSON snapshot)", args.bind);
    println!("\n💡 First load of a key is COLD (high gas),");
    println!("   every load after that is WARM (low gas).");
    println!("\n🛑 Press Ctrl+C to stop\n");

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                info!("New connection from {}", addr);
                let handler = ActionHandler::new(Arc::clone(&sim), Arc::clone(&stats));

                tokio::spawn(async move {
                    if let Err(e) = handle_client(stream, handler).await {
                        error!("Error handling client {}: {}", addr, e);
                    }
                    info!("Connection closed: {}", addr);
                });
            }
            Err(e) => {
                error!("Error accepting connection: {}", e);
            }
        }
    }
}

async fn handle_client(mut stream: TcpStream, handler: ActionHandler) -> Result<()> {
    let mut buffer = BytesMut::with_capacity(4096);

    loop {
        // Read data from client
        let n = stream.read_buf(&mut buffer).await?;

        if n == 0 {
            // Connection closed
            return Ok(());
        }

        // Parse and handle requests
        loop {
            match Request::parse(&mut buffer) {
                Ok(Some(request)) => {
                    let response = handler.handle(&request);
                    stream.write_all(&response.serialize()).await?;
                }
                Ok(None) => {
                    // Need more data
                    break;
                }
                Err(e) => {
                    warn!("Parse error: {}", e);
                    let error_resp = Response::bad_request(&e);
                    stream.write_all(&error_resp.serialize()).await?;
                    buffer.clear();
                    return Ok(());
                }
            }
        }
    }
}
