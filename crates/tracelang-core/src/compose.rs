//! Function-simulation composition.
//!
//! [`func`] wraps a callback that emits a step/effect sequence into a fully
//! bracketed `call ... return` subsequence, so simulated functions can call
//! other simulated functions and compose into a single flat trace:
//!
//! - The callback receives a [`LineBuilder`] whose [`line`](LineBuilder::line)
//!   method rebases line numbers relative to the function's own source onto
//!   absolute trace line numbers.
//! - A trailing [`retval`](crate::builder::retval) marker is removed from the
//!   body and surfaced as [`FuncCall::result`]; any other occurrence of the
//!   marker fails with [`BuildError::ProtocolViolation`].
//! - The bracketing guarantees every simulated function contributes a
//!   matched frame push/pop to the interpreter's stack, so nested calls
//!   nest correctly without the author emitting `call`/`return` by hand.

use crate::builder;
use crate::error::BuildError;
use crate::item::SequenceItem;
use crate::value::Value;

/// Step builder handed to a [`func`] callback, carrying the function's
/// absolute first line for rebasing.
#[derive(Debug, Clone, Copy)]
pub struct LineBuilder {
    first_line: Option<u32>,
}

impl LineBuilder {
    /// Like [`crate::builder::line`], but when both `line` and the
    /// function's `first_line` are present, the step is stamped with
    /// `first_line + line` -- the body authors steps with line numbers
    /// relative to its own source while the trace stays absolute.
    pub fn line<K: Into<String>>(
        &self,
        line: Option<u32>,
        effects: Vec<SequenceItem>,
        fields: Vec<(K, Value)>,
    ) -> Result<Vec<SequenceItem>, BuildError> {
        let rebased = match (line, self.first_line) {
            (Some(rel), Some(first)) => Some(first + rel),
            (other, _) => other,
        };
        builder::line(rebased, effects, fields)
    }

    /// The absolute first line this builder rebases onto, if any.
    pub fn first_line(&self) -> Option<u32> {
        self.first_line
    }
}

/// The composed output of one simulated function call.
///
/// Serves two audiences at once: the immediate caller wants [`result`]
/// (the simulated return value, if the body ended in a `retval`), while the
/// flattening splice wants only [`items`] -- the bracketed trace
/// subsequence `call ... return`.
///
/// [`result`]: FuncCall::result
/// [`items`]: FuncCall::items
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    /// The simulated return value, if the body ended in a `retval` marker.
    pub result: Option<Value>,
    /// The bracketed trace items: `call(name)`, the body, `return`.
    pub items: Vec<SequenceItem>,
}

impl FuncCall {
    /// Positional destructuring: `(return value, trace items)`.
    pub fn into_parts(self) -> (Option<Value>, Vec<SequenceItem>) {
        (self.result, self.items)
    }
}

/// Builds the bracketed subsequence representing one simulated function's
/// execution.
///
/// `first_line` is the function's absolute first source line; `None`
/// disables rebasing in the [`LineBuilder`] passed to `body`. The body
/// returns the function's step/effect sequence, optionally ending in a
/// `retval` marker.
///
/// Fails with [`BuildError::ProtocolViolation`] if a `retval` marker
/// appears anywhere but the final position, and propagates any builder
/// error raised inside `body`.
pub fn func<F>(
    name: impl Into<String>,
    first_line: Option<u32>,
    body: F,
) -> Result<FuncCall, BuildError>
where
    F: FnOnce(&LineBuilder) -> Result<Vec<SequenceItem>, BuildError>,
{
    let builder = LineBuilder { first_line };
    let mut steps = body(&builder)?;

    let result = match steps.pop() {
        Some(SequenceItem::ReturnValue { result }) => Some(result),
        Some(other) => {
            steps.push(other);
            None
        }
        None => None,
    };

    if steps.iter().any(SequenceItem::is_return_value) {
        return Err(BuildError::protocol_violation(
            "only one retval() at the end of a function body is allowed",
        ));
    }

    let mut items = Vec::with_capacity(steps.len() + 2);
    items.push(builder::call(name));
    items.append(&mut steps);
    items.push(builder::ret());

    Ok(FuncCall { result, items })
}
