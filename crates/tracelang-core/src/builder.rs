//! Builders for the user-facing trace language.
//!
//! Effect constructors ([`call`], [`push`], [`assign`], [`ret`], [`retval`])
//! are pure, side-effect-free builders producing a single [`SequenceItem`].
//! [`step`] records a visible point in the trace; [`bare_line`] batches
//! "apply these effects, then record this step" -- the fundamental unit of
//! the trace language -- and [`line`] additionally stamps the step with a
//! source line number.
//!
//! Step fields are an ordered list of `(name, value)` pairs. The field name
//! `type` is reserved (it is the wire tag) and an empty field name is
//! rejected -- only named arguments are allowed.

use crate::error::BuildError;
use crate::item::{SequenceItem, StepFields};
use crate::value::Value;

/// Effect: push a new stack frame named `name`.
pub fn call(name: impl Into<String>) -> SequenceItem {
    SequenceItem::Call { name: name.into() }
}

/// Effect: declare/initialize variable `name` in the current frame.
pub fn push(name: impl Into<String>, value: impl Into<Value>) -> SequenceItem {
    SequenceItem::Push { name: name.into(), value: value.into() }
}

/// Effect: update the existing variable `name` in the current frame.
pub fn assign(name: impl Into<String>, value: impl Into<Value>) -> SequenceItem {
    SequenceItem::Assign { name: name.into(), value: value.into() }
}

/// Effect: pop the current stack frame.
pub fn ret() -> SequenceItem {
    SequenceItem::Return
}

/// The transient return-value marker for a simulated function body.
///
/// Must appear at most once per body and, if present, as the last item of
/// the body's sequence. Enforced by [`crate::compose::func`], not here.
pub fn retval(result: impl Into<Value>) -> SequenceItem {
    SequenceItem::ReturnValue { result: result.into() }
}

/// Builds a single `step` item from ordered `(name, value)` field pairs.
///
/// Fails with [`BuildError::InvalidArgument`] if a field name is empty
/// (only named arguments are allowed) or is the reserved name `type`.
pub fn step<K: Into<String>>(fields: Vec<(K, Value)>) -> Result<SequenceItem, BuildError> {
    let mut out = StepFields::with_capacity(fields.len());
    for (key, value) in fields {
        let key = key.into();
        if key.is_empty() {
            return Err(BuildError::invalid_argument("only named arguments allowed"));
        }
        if key == "type" {
            return Err(BuildError::invalid_argument(
                "'type' is a reserved step field name",
            ));
        }
        out.insert(key, value);
    }
    Ok(SequenceItem::Step { fields: out })
}

/// Emits `effects` in order, followed by exactly one step built from
/// `fields` (same validation as [`step`]).
///
/// The result has length `effects.len() + 1`.
pub fn bare_line<K: Into<String>>(
    effects: Vec<SequenceItem>,
    fields: Vec<(K, Value)>,
) -> Result<Vec<SequenceItem>, BuildError> {
    let trailing = step(fields)?;
    let mut items = effects;
    items.push(trailing);
    Ok(items)
}

/// Thin wrapper over [`bare_line`] that injects a `line` field into the
/// trailing step, ahead of any other fields.
///
/// `line` may be `None`, meaning "no associated line"; the field is then
/// injected as [`Value::Null`] (used when a function is simulated without
/// line-offset rebasing).
pub fn line<K: Into<String>>(
    line: Option<u32>,
    effects: Vec<SequenceItem>,
    fields: Vec<(K, Value)>,
) -> Result<Vec<SequenceItem>, BuildError> {
    let mut all: Vec<(String, Value)> = Vec::with_capacity(fields.len() + 1);
    all.push(("line".into(), line.into()));
    all.extend(fields.into_iter().map(|(k, v)| (k.into(), v)));
    bare_line(effects, all)
}
