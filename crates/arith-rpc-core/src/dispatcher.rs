//! Request validation and execution.
//!
//! Each request moves through decode, validate, execute and encode exactly
//! once. A failure at any stage becomes a fault [`Response`]; it is still a
//! complete, well-formed reply and never an error for the transport.

use crate::codec;
use crate::error::RpcError;
use crate::registry;
use crate::types::{Call, Response};
use tracing::{debug, warn};

/// True if the call names a registered operation and its argument count fits
/// that operation's arity.
///
/// Argument types need no check here: [`Call::args`] is already `i32`, and
/// anything else was rejected by [`codec::decode_call`].
pub fn validate(call: &Call) -> bool {
    registry::lookup(&call.name)
        .map(|op| op.arity.accepts(call.args.len()))
        .unwrap_or(false)
}

/// Execute a decoded call.
///
/// Only calls that pass [`validate`] reach the operation. An unknown operation
/// is reported exactly like an arity mismatch (fault 1).
pub fn execute(call: &Call) -> Response {
    let result = match registry::lookup(&call.name) {
        Some(op) if validate(call) => op.apply(&call.args),
        _ => Err(RpcError::InvalidArguments {
            method: call.name.clone(),
        }),
    };

    match result {
        Ok(value) => {
            debug!("{}({:?}) = {}", call.name, call.args, value);
            Response::Success(value)
        }
        Err(e) => {
            warn!("{}({:?}) faulted: {}", call.name, call.args, e);
            fault_response(&e)
        }
    }
}

/// Decode, validate and execute one request body.
pub fn handle_request(body: &str) -> Response {
    match codec::decode_call(body) {
        Ok(call) => {
            debug!("RPC call: {}({:?})", call.name, call.args);
            execute(&call)
        }
        Err(e) => {
            warn!("Rejected request body: {}", e);
            fault_response(&e)
        }
    }
}

/// Request body in, response body out.
pub fn handle_request_body(body: &str) -> String {
    codec::encode_response(&handle_request(body))
}

/// Like [`handle_request_body`] for a raw HTTP body; invalid UTF-8 is a parse fault.
pub fn handle_request_bytes(body: &[u8]) -> String {
    match std::str::from_utf8(body) {
        Ok(text) => handle_request_body(text),
        Err(e) => {
            warn!("Rejected request body: {}", e);
            let err = RpcError::Parse {
                message: format!("body is not UTF-8: {}", e),
            };
            codec::encode_response(&fault_response(&err))
        }
    }
}

fn fault_response(err: &RpcError) -> Response {
    // Only protocol errors reach here, and all of them carry a fault code.
    err.to_fault()
        .unwrap_or_else(|| Response::fault(crate::error::FAULT_PARSE, err.to_string()))
}
