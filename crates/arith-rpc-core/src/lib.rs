//! Arith RPC Core - XML-RPC integer arithmetic protocol.
//!
//! This crate provides the wire codec, the fixed operation registry and the
//! dispatcher that turns a request body into a response body. It has no HTTP
//! server of its own; `arith-rpc-server` hosts [`dispatcher::handle_request_body`]
//! behind `POST /RPC`, and [`RpcClient`] speaks the same protocol from the
//! other side.
//!
//! # Example
//!
//! ```rust
//! use arith_rpc_core::{codec, dispatcher, Response};
//!
//! let body = codec::encode_call("add", &[1, 2, 3]);
//! let reply = dispatcher::handle_request_body(&body);
//! assert_eq!(codec::decode_response(&reply).unwrap(), Response::Success(6));
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use client::RpcClient;
pub use config::{ClientConfig, ServerConfig};
pub use error::{RpcError, Result};
pub use registry::{Arity, OperationSpec};
pub use types::{Call, Response};
