//! Centralized configuration for the arithmetic RPC service.
//!
//! Defaults live here as associated constants; the binaries override host and
//! port from their command lines.

use std::time::Duration;

/// Server endpoint configuration.
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const RPC_PATH: &'static str = "/RPC";
    pub const MAX_BODY_BYTES: usize = 1_048_576; // 1MB
    pub const CONTENT_TYPE: &'static str = "text/xml";
}

/// Client caller configuration.
pub struct ClientConfig;

impl ClientConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const USER_AGENT: &'static str = "arith-rpc-client/0.1";
    pub const CONTENT_TYPE: &'static str = ServerConfig::CONTENT_TYPE;
}
