//! The replay interpreter: a single left-to-right fold over a trace.

use indexmap::map::Entry;

use tracelang_core::SequenceItem;

use crate::error::RuntimeError;
use crate::snapshot::Snapshot;
use crate::state::ExecutionState;

/// Folds a finalized sequence into an ordered list of snapshots, one per
/// `step` item, in input order.
///
/// The fold maintains one mutable [`ExecutionState`]:
///
/// - `step` records a [`Snapshot`] holding a deep copy of the current state.
/// - `call` pushes a new empty frame; `return` pops the current one.
/// - `push` declares a variable in the current frame; declaring a name that
///   already exists there fails with [`RuntimeError::DuplicateVariable`].
/// - `assign` updates an existing variable; a name never pushed in the
///   current frame fails with [`RuntimeError::UndefinedVariable`].
/// - a `return-value` marker reaching the interpreter is a malformed
///   sequence (it must be consumed by the composer) and fails with
///   [`RuntimeError::ProtocolViolation`].
///
/// Fail-fast: the first error aborts interpretation and no partial snapshot
/// list is returned. The function has no shared state; concurrent calls on
/// independent sequences are fully independent.
pub fn execute(items: &[SequenceItem]) -> Result<Vec<Snapshot>, RuntimeError> {
    let mut state = ExecutionState::new();
    let mut snapshots = Vec::new();

    for item in items {
        match item {
            SequenceItem::Step { fields } => {
                snapshots.push(Snapshot { step: fields.clone(), state: state.clone() });
            }
            SequenceItem::Call { name } => {
                state.push_frame(name.clone());
            }
            SequenceItem::Push { name, value } => {
                let frame = state.current_frame_mut("push")?;
                match frame.vars.entry(name.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(value.clone());
                    }
                    Entry::Occupied(_) => {
                        return Err(RuntimeError::DuplicateVariable { name: name.clone() });
                    }
                }
            }
            SequenceItem::Assign { name, value } => {
                let frame = state.current_frame_mut("assign")?;
                match frame.vars.get_mut(name) {
                    Some(slot) => *slot = value.clone(),
                    None => {
                        return Err(RuntimeError::UndefinedVariable { name: name.clone() });
                    }
                }
            }
            SequenceItem::Return => {
                state.pop_frame()?;
            }
            SequenceItem::ReturnValue { .. } => {
                return Err(RuntimeError::ProtocolViolation {
                    reason: "return-value marker reached the interpreter".into(),
                });
            }
        }
    }

    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracelang_core::{assign, call, push, ret, retval, step, Value};

    fn step_with(fields: Vec<(&str, Value)>) -> SequenceItem {
        step(fields).unwrap()
    }

    #[test]
    fn empty_sequence_yields_no_snapshots() {
        assert_eq!(execute(&[]).unwrap(), vec![]);
    }

    #[test]
    fn snapshot_records_step_fields_without_a_type_tag() {
        let items = vec![step_with(vec![("id", Value::Int(1))])];
        let snapshots = execute(&items).unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].step.get("id"), Some(&Value::Int(1)));
        assert!(snapshots[0].step.get("type").is_none());
        assert_eq!(snapshots[0].state.depth(), 0);
    }

    #[test]
    fn push_declares_in_the_current_frame() {
        let items = vec![
            call("main"),
            call("inner"),
            push("x", 1),
            step_with(vec![]),
            ret(),
            ret(),
        ];
        let snapshots = execute(&items).unwrap();
        let state = &snapshots[0].state;
        assert_eq!(state.stack[0].vars.len(), 0);
        assert_eq!(state.stack[1].get("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn duplicate_push_fails() {
        let items = vec![call("main"), push("x", 1), push("x", 2)];
        assert_eq!(
            execute(&items),
            Err(RuntimeError::DuplicateVariable { name: "x".into() })
        );
    }

    #[test]
    fn assign_requires_a_prior_push() {
        let items = vec![call("main"), assign("x", 2)];
        assert_eq!(
            execute(&items),
            Err(RuntimeError::UndefinedVariable { name: "x".into() })
        );
    }

    #[test]
    fn assign_does_not_see_outer_frames() {
        // `x` lives in main's frame; inner's assign must not reach it.
        let items = vec![call("main"), push("x", 1), call("inner"), assign("x", 2)];
        assert_eq!(
            execute(&items),
            Err(RuntimeError::UndefinedVariable { name: "x".into() })
        );
    }

    #[test]
    fn return_on_empty_stack_fails() {
        assert_eq!(
            execute(&[ret()]),
            Err(RuntimeError::EmptyStack { action: "return".into() })
        );
    }

    #[test]
    fn push_with_no_open_frame_fails() {
        assert_eq!(
            execute(&[push("x", 1)]),
            Err(RuntimeError::EmptyStack { action: "push".into() })
        );
    }

    #[test]
    fn leaked_return_value_marker_fails() {
        let items = vec![call("main"), retval(42), ret()];
        assert!(matches!(
            execute(&items),
            Err(RuntimeError::ProtocolViolation { .. })
        ));
    }

    #[test]
    fn failure_returns_no_partial_snapshots() {
        // A snapshot is recorded before the failure, but the error discards it.
        let items = vec![call("main"), step_with(vec![]), assign("x", 1)];
        assert!(execute(&items).is_err());
    }
}
