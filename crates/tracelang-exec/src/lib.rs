//! Replay interpreter for tracelang sequences.
//!
//! Consumes a finalized trace (an ordered slice of
//! [`SequenceItem`](tracelang_core::SequenceItem)s built by the
//! `tracelang-core` builders) and folds it into an ordered list of
//! [`Snapshot`]s, one per `step` item -- the data the rendering layer
//! consumes for frame-by-frame animation.
//!
//! # Architecture
//!
//! - [`ExecutionState`] is the single mutable value of the fold: a stack of
//!   [`Frame`]s, the tail frame being current.
//! - [`Snapshot`] pairs a step's fields with a deep copy of the state taken
//!   at that moment; later effects never alter an earlier snapshot.
//! - [`RuntimeError`] captures structural misuse of the protocol
//!   (undefined/duplicate variables, stack underflow, leaked markers).
//! - [`execute`] is the fold itself: pure, synchronous, fail-fast.

pub mod error;
pub mod interpreter;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use error::RuntimeError;
pub use interpreter::execute;
pub use snapshot::Snapshot;
pub use state::{ExecutionState, Frame};
