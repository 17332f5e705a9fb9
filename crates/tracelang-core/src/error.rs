//! Build-time error types for trace construction.
//!
//! Uses `thiserror` for structured, matchable error variants. All failures
//! here indicate an authoring bug in trace construction code -- they are
//! fail-fast and carry no recovery semantics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the trace builders and the function composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum BuildError {
    /// A malformed builder call: positional arguments where only named
    /// arguments are allowed, or a reserved field name used.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A return-value marker used more than once or not in trailing
    /// position of a simulated function body.
    #[error("protocol violation: {reason}")]
    ProtocolViolation { reason: String },
}

impl BuildError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        BuildError::InvalidArgument { reason: reason.into() }
    }

    pub(crate) fn protocol_violation(reason: impl Into<String>) -> Self {
        BuildError::ProtocolViolation { reason: reason.into() }
    }
}
