//! Core data model and builders for the tracelang trace language.
//!
//! A trace is a flat ordered sequence of tagged [`SequenceItem`]s describing
//! one program execution to be replayed and visualized. This crate provides:
//!
//! - [`Value`] — the dynamic payload carried by step fields, variables and
//!   return values.
//! - [`SequenceItem`] — one variant per protocol tag (`step`, `call`, `push`,
//!   `assign`, `return`, plus the transient `return-value` marker).
//! - Builders ([`step`], [`bare_line`], [`line`], the effect constructors)
//!   that assemble well-formed sequences.
//! - The function-simulation composer [`func`], which brackets a simulated
//!   function body with matched call/return effects, rebases relative line
//!   numbers, and extracts the body's return value.
//!
//! Interpretation of finished sequences lives in the `tracelang-exec` crate.

pub mod builder;
pub mod compose;
pub mod error;
pub mod item;
pub mod value;

// Re-export commonly used types
pub use builder::{assign, bare_line, call, line, push, ret, retval, step};
pub use compose::{func, FuncCall, LineBuilder};
pub use error::BuildError;
pub use item::{SequenceItem, StepFields};
pub use value::Value;
