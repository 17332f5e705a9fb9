//! Execution state reconstructed during replay: the simulated call stack.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use tracelang_core::Value;

use crate::error::RuntimeError;

/// One entry of the simulated call stack: a function name and its local
/// variables. `vars` preserves insertion order for stable rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    pub vars: IndexMap<String, Value>,
}

impl Frame {
    /// Creates an empty frame for a function named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Frame { name: name.into(), vars: IndexMap::new() }
    }

    /// Looks up a variable in this frame.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}

/// The simulated call stack. The tail frame is "current".
///
/// Created empty at the start of interpretation, mutated in place by
/// `call`/`push`/`assign`/`return` effects, and discarded once the full
/// sequence is consumed. Snapshots clone the whole state, so every
/// [`crate::Snapshot`] is structurally independent of later mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExecutionState {
    pub stack: Vec<Frame>,
}

impl ExecutionState {
    /// Creates an empty state (`stack = []`).
    pub fn new() -> Self {
        ExecutionState::default()
    }

    /// Current stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes a new empty frame for `name`.
    pub(crate) fn push_frame(&mut self, name: String) {
        self.stack.push(Frame::new(name));
    }

    /// Pops the current frame, failing if the stack is already empty.
    pub(crate) fn pop_frame(&mut self) -> Result<(), RuntimeError> {
        match self.stack.pop() {
            Some(_) => Ok(()),
            None => Err(RuntimeError::EmptyStack { action: "return".into() }),
        }
    }

    /// Returns the current (tail) frame, failing if no frame is open.
    pub(crate) fn current_frame_mut(&mut self, action: &str) -> Result<&mut Frame, RuntimeError> {
        self.stack
            .last_mut()
            .ok_or_else(|| RuntimeError::EmptyStack { action: action.into() })
    }
}
