//! Arith RPC Server - XML-RPC integer arithmetic over HTTP.
//!
//! Serves `POST /RPC` using the codec and dispatcher from `arith-rpc-core`.

mod handler;
mod server;

use anyhow::Result;
use arith_rpc_core::ServerConfig;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "arith-rpc-server")]
#[command(about = "XML-RPC server for 32-bit integer arithmetic")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Starting Arith RPC Server on port {}", args.port);

    let addr = server::start_server(&args.host, args.port).await?;

    // Print port for whoever launched us (intentional stdout, parsed by tests)
    println!("RPC_PORT={}", addr.port());

    info!("RPC server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
