//! Per-step state captures, the output contract to the rendering layer.

use serde::{Deserialize, Serialize};

use tracelang_core::StepFields;

use crate::state::ExecutionState;

/// An immutable capture of execution state paired with the fields of the
/// step that triggered it.
///
/// Each snapshot is recorded once, at its `step` item, holding a deep copy
/// of the state as it existed at that moment; its lifetime is independent
/// of the interpreter's [`ExecutionState`] and of every other snapshot, so
/// snapshots can be consumed in isolation or as a sequence for
/// frame-by-frame animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The triggering step's user fields (everything except the `type` tag).
    pub step: StepFields,
    /// The call stack as it existed when the step was recorded.
    pub state: ExecutionState,
}
