//! Call and response values carried by the protocol.

use std::fmt;

/// A decoded method call: an operation name and its ordered int32 operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub args: Vec<i32>,
}

impl Call {
    pub fn new(name: impl Into<String>, args: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Outcome of a single call, as written to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success(i32),
    Fault { code: i32, message: String },
}

impl Response {
    pub fn fault(code: i32, message: impl Into<String>) -> Self {
        Response::Fault {
            code,
            message: message.into(),
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Response::Fault { .. })
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Success(value) => write!(f, "{}", value),
            Response::Fault { code, message } => write!(f, "fault {}: {}", code, message),
        }
    }
}
