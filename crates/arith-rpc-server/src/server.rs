//! HTTP server implementation using Axum.

use crate::handler::{handle_not_found, handle_rpc, handle_unsupported};
use arith_rpc_core::ServerConfig;
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the router.
///
/// `POST /RPC` is the only real endpoint. The root path answers 404 to POST
/// and 405 to the other common methods; everything else is 404.
pub fn build_router() -> Router {
    Router::new()
        .route(ServerConfig::RPC_PATH, post(handle_rpc))
        .route(
            "/",
            post(handle_not_found)
                .get(handle_unsupported)
                .put(handle_unsupported)
                .delete(handle_unsupported)
                .options(handle_unsupported),
        )
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(ServerConfig::MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Start the XML-RPC HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
/// Requests are served concurrently; no handler shares state with another.
pub async fn start_server(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let app = build_router();

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
