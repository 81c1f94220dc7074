//! Error types for reax-dispatch.
//!
//! Errors live in two disjoint tiers:
//!
//! - [`DispatchError`] - dispatcher-level (transport) failures: unknown
//!   command, undecodable payload. Synthesized before any handler runs.
//! - [`ReaxError`] - handler-level (domain) failures: a serializable value a
//!   handler returns when the command was valid and routed correctly but
//!   could not be carried out.
//!
//! Both land on the same outbound "error" event kind, but the dispatcher
//! tier is testable without any handler logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dispatcher-level error. Never produced by a handler.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Identifier did not match any member of the command enumeration.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Payload could not be decoded into the handler's input type.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// A reply or error value could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Underlying device failed a lifecycle operation (start/stop).
    /// Logged at the dispatcher, never emitted to the host.
    #[error("device error: {0}")]
    Device(String),
}

/// Result type alias using DispatchError.
pub type Result<T> = std::result::Result<T, DispatchError>;

impl DispatchError {
    /// Descriptor emitted on the "error" event kind.
    ///
    /// Dispatcher-level errors cross the boundary in the same shape as a
    /// [`ReaxError`] so the host decodes one error schema for both tiers.
    pub fn to_descriptor(&self) -> ReaxError {
        let code = match self {
            DispatchError::UnknownCommand(_) => "unknownCommand",
            DispatchError::MalformedPayload(_) => "malformedPayload",
            DispatchError::Encode(_) => "encodeFailure",
            DispatchError::Device(_) => "deviceFailure",
        };
        ReaxError::new(code, self.to_string())
    }
}

/// Domain error returned by a handler.
///
/// Serializable so it can cross the boundary; `code` is a stable,
/// machine-readable discriminant, `message` is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaxError {
    /// Stable error code (e.g. "invalidFrequency").
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl ReaxError {
    /// Create a new domain error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ReaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
