//! HTTP request handlers.

use arith_rpc_core::dispatcher;
use arith_rpc_core::ServerConfig;
use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::debug;

/// Main XML-RPC handler.
///
/// Always answers 200: a fault is a normal reply encoded in the body.
pub async fn handle_rpc(body: Bytes) -> impl IntoResponse {
    debug!("RPC request: {} bytes", body.len());
    let reply = dispatcher::handle_request_bytes(&body);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, ServerConfig::CONTENT_TYPE)],
        reply,
    )
}

pub async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found.")
}

pub async fn handle_unsupported() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Unsupported request.")
}
