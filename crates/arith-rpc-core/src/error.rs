//! Error types for the arithmetic RPC protocol.
//!
//! Every failure a request can hit is a variant of [`RpcError`]. The variants
//! that are reported to the peer have a fixed fault code and message; the rest
//! (transport, network, configuration) only ever surface on the client side.

use crate::types::Response;
use thiserror::Error;

/// Fault code shared by unknown operations, arity mismatches and division by zero.
pub const FAULT_INVALID_ARGUMENTS: i32 = 1;

/// Fault code for a request envelope that could not be parsed.
pub const FAULT_PARSE: i32 = 2;

/// Fault code for a parameter that is not an `i4`.
pub const FAULT_UNSUPPORTED_TYPE: i32 = 3;

pub const MSG_INVALID_ARGUMENTS: &str = "Unexpected arguments for the requested method type.";
pub const MSG_DIVIDE_BY_ZERO: &str = "Divide by zero";
pub const MSG_UNSUPPORTED_TYPE: &str =
    "A param was requested that is not of type i4, this is not supported.";

/// Main error type for the arithmetic RPC protocol.
#[derive(Debug, Error)]
pub enum RpcError {
    // Codec errors
    #[error("Malformed XML-RPC document: {message}")]
    Parse { message: String },

    #[error("A param was requested that is not of type i4, this is not supported.")]
    UnsupportedType {
        /// Type tag that was found instead, or a description of what was missing
        tag: String,
    },

    // Dispatch errors
    #[error("Unexpected arguments for the requested method type.")]
    InvalidArguments { method: String },

    #[error("Divide by zero")]
    DivideByZero,

    // Client-side errors
    #[error("Responded with status {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("Server could not handle request. Fault code: {code}. {message}")]
    Fault { code: i32, message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for protocol operations.
pub type Result<T> = std::result::Result<T, RpcError>;

impl From<quick_xml::Error> for RpcError {
    fn from(err: quick_xml::Error) -> Self {
        RpcError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        RpcError::Network {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl RpcError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        RpcError::Parse {
            message: message.into(),
        }
    }

    pub(crate) fn unsupported_type(tag: impl Into<String>) -> Self {
        RpcError::UnsupportedType { tag: tag.into() }
    }

    /// Fault code this error is reported under, if it is reported to the peer.
    ///
    /// Unknown operations share code 1 with arity mismatches and division by
    /// zero, so a client cannot tell them apart by code alone.
    pub fn fault_code(&self) -> Option<i32> {
        match self {
            RpcError::InvalidArguments { .. } | RpcError::DivideByZero => {
                Some(FAULT_INVALID_ARGUMENTS)
            }
            RpcError::Parse { .. } => Some(FAULT_PARSE),
            RpcError::UnsupportedType { .. } => Some(FAULT_UNSUPPORTED_TYPE),
            RpcError::Fault { code, .. } => Some(*code),
            RpcError::Transport { .. } | RpcError::Network { .. } | RpcError::Config { .. } => {
                None
            }
        }
    }

    /// Convert to the fault response written on the wire.
    pub fn to_fault(&self) -> Option<Response> {
        let code = self.fault_code()?;
        let message = match self {
            RpcError::InvalidArguments { .. } => MSG_INVALID_ARGUMENTS.to_string(),
            RpcError::DivideByZero => MSG_DIVIDE_BY_ZERO.to_string(),
            RpcError::UnsupportedType { .. } => MSG_UNSUPPORTED_TYPE.to_string(),
            RpcError::Fault { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Some(Response::Fault { code, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RpcError::InvalidArguments {
            method: "power".into(),
        };
        assert_eq!(err.to_string(), MSG_INVALID_ARGUMENTS);
        assert_eq!(RpcError::DivideByZero.to_string(), MSG_DIVIDE_BY_ZERO);
        assert_eq!(
            RpcError::unsupported_type("string").to_string(),
            MSG_UNSUPPORTED_TYPE
        );
    }

    #[test]
    fn test_fault_codes() {
        assert_eq!(RpcError::DivideByZero.fault_code(), Some(1));
        assert_eq!(
            RpcError::InvalidArguments {
                method: "subtract".into()
            }
            .fault_code(),
            Some(1)
        );
        assert_eq!(RpcError::parse("no root").fault_code(), Some(2));
        assert_eq!(RpcError::unsupported_type("double").fault_code(), Some(3));
        assert_eq!(
            RpcError::Transport {
                status: 404,
                body: "Not found.".into()
            }
            .fault_code(),
            None
        );
    }

    #[test]
    fn test_to_fault() {
        assert_eq!(
            RpcError::unsupported_type("boolean").to_fault(),
            Some(Response::fault(3, MSG_UNSUPPORTED_TYPE))
        );
        assert_eq!(
            RpcError::parse("missing methodName").to_fault(),
            Some(Response::fault(
                2,
                "Malformed XML-RPC document: missing methodName"
            ))
        );
        assert!(RpcError::Config {
            message: "bad url".into()
        }
        .to_fault()
        .is_none());
    }
}
