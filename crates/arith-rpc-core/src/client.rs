//! Client caller for the arithmetic RPC endpoint.
//!
//! Wraps a reqwest client and maps every way a call can end into
//! [`RpcError`]:
//! - non-200 status: [`RpcError::Transport`] with status and body
//! - fault body: [`RpcError::Fault`] with the server's code and message
//! - success body without a single `i4`: [`RpcError::UnsupportedType`]

use crate::codec;
use crate::config::{ClientConfig, ServerConfig};
use crate::error::{Result, RpcError};
use crate::types::Response;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP client bound to one `/RPC` endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: Client,
    endpoint: Url,
}

impl RpcClient {
    /// Create a client for a full endpoint URL with the default timeout.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, ClientConfig::REQUEST_TIMEOUT)
    }

    /// Create a client for `http://{host}:{port}/RPC`.
    pub fn for_host(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("http://{}:{}{}", host, port, ServerConfig::RPC_PATH))
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| RpcError::Config {
            message: format!("Invalid endpoint '{}': {}", endpoint, e),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(RpcError::Config {
                message: format!("Unsupported endpoint scheme: {}", endpoint.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(ClientConfig::USER_AGENT)
            .build()
            .map_err(|e| RpcError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(e),
            })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Perform one call and wait for its result.
    pub async fn call(&self, name: &str, args: &[i32]) -> Result<i32> {
        debug!("POST {} {}({:?})", self.endpoint, name, args);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, ClientConfig::CONTENT_TYPE)
            .body(codec::encode_call(name, args))
            .send()
            .await
            .map_err(|e| RpcError::Network {
                message: format!("POST {} failed: {}", self.endpoint, e),
                source: Some(e),
            })?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(RpcError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        match codec::decode_response(&body)? {
            Response::Success(value) => Ok(value),
            Response::Fault { code, message } => Err(RpcError::Fault { code, message }),
        }
    }

    pub async fn add(&self, args: &[i32]) -> Result<i32> {
        self.call("add", args).await
    }

    pub async fn multiply(&self, args: &[i32]) -> Result<i32> {
        self.call("multiply", args).await
    }

    pub async fn subtract(&self, lhs: i32, rhs: i32) -> Result<i32> {
        self.call("subtract", &[lhs, rhs]).await
    }

    pub async fn divide(&self, lhs: i32, rhs: i32) -> Result<i32> {
        self.call("divide", &[lhs, rhs]).await
    }

    pub async fn modulo(&self, lhs: i32, rhs: i32) -> Result<i32> {
        self.call("modulo", &[lhs, rhs]).await
    }
}
