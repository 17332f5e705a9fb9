//! Runtime error types for trace replay.
//!
//! Every variant indicates a structural misuse of the trace protocol, not a
//! recoverable condition: interpretation aborts at the first error and no
//! partial snapshot list is returned.

use serde::{Deserialize, Serialize};

/// Runtime errors produced by the interpreter fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RuntimeError {
    /// `assign` targeted a variable never pushed in the current frame.
    #[error("undefined variable: '{name}' was never pushed in the current frame")]
    UndefinedVariable { name: String },

    /// `push` targeted a variable that already exists in the current frame.
    #[error("duplicate variable: '{name}' already exists in the current frame")]
    DuplicateVariable { name: String },

    /// An effect needed an open frame but the stack was empty.
    #[error("empty stack: '{action}' with no open frame")]
    EmptyStack { action: String },

    /// A malformed sequence reached the interpreter, e.g. a return-value
    /// marker not consumed by the composer.
    #[error("protocol violation: {reason}")]
    ProtocolViolation { reason: String },
}
