//! The tagged-event protocol: one [`SequenceItem`] variant per trace tag.
//!
//! A trace is an ordered `Vec<SequenceItem>`. Four of the variants are
//! *effects* that mutate interpreter state (`Call`, `Push`, `Assign`,
//! `Return`); `Step` marks a point where the current state must be
//! snapshotted; `ReturnValue` is a transient marker consumed by the composer
//! in [`crate::compose::func`] and must never reach the interpreter.
//!
//! The serde form is internally tagged with `type` and kebab-case variant
//! names, so items serialize exactly as the protocol table: `{"type":
//! "step", ...}`, `{"type": "return-value", ...}`. `type` is therefore a
//! reserved field name and may never appear among a step's user fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Ordered user fields of a `step` item. Insertion order is preserved for
/// stable rendering but is not semantically load-bearing.
pub type StepFields = IndexMap<String, Value>;

/// A single tagged item of a trace sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SequenceItem {
    /// A point at which execution state should be recorded/rendered.
    Step { fields: StepFields },

    /// Push a new stack frame.
    Call { name: String },

    /// Declare/initialize a variable in the current frame.
    Push { name: String, value: Value },

    /// Update an existing variable in the current frame.
    Assign { name: String, value: Value },

    /// Pop the current stack frame.
    Return,

    /// Transient marker: signals a simulated function's return value.
    /// Extracted by the composer; a leak past it is a protocol violation.
    ReturnValue { result: Value },
}

impl SequenceItem {
    /// Returns the protocol tag of this item, as it appears on the wire.
    pub fn tag(&self) -> &'static str {
        match self {
            SequenceItem::Step { .. } => "step",
            SequenceItem::Call { .. } => "call",
            SequenceItem::Push { .. } => "push",
            SequenceItem::Assign { .. } => "assign",
            SequenceItem::Return => "return",
            SequenceItem::ReturnValue { .. } => "return-value",
        }
    }

    /// Returns `true` for the transient return-value marker.
    pub fn is_return_value(&self) -> bool {
        matches!(self, SequenceItem::ReturnValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_protocol_table() {
        let mut fields = StepFields::new();
        fields.insert("line".into(), Value::Int(1));

        assert_eq!(SequenceItem::Step { fields }.tag(), "step");
        assert_eq!(SequenceItem::Call { name: "f".into() }.tag(), "call");
        assert_eq!(
            SequenceItem::Push { name: "x".into(), value: Value::Int(1) }.tag(),
            "push"
        );
        assert_eq!(
            SequenceItem::Assign { name: "x".into(), value: Value::Int(2) }.tag(),
            "assign"
        );
        assert_eq!(SequenceItem::Return.tag(), "return");
        assert_eq!(
            SequenceItem::ReturnValue { result: Value::Int(42) }.tag(),
            "return-value"
        );
    }

    #[test]
    fn wire_form_uses_type_tag() {
        let item = SequenceItem::Call { name: "main".into() };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "call");
        assert_eq!(json["name"], "main");

        let json = serde_json::to_value(&SequenceItem::Return).unwrap();
        assert_eq!(json["type"], "return");

        let json =
            serde_json::to_value(&SequenceItem::ReturnValue { result: Value::Int(42) }).unwrap();
        assert_eq!(json["type"], "return-value");
        assert_eq!(json["result"], 42);
    }

    #[test]
    fn serde_roundtrip() {
        let mut fields = StepFields::new();
        fields.insert("line".into(), Value::Int(3));
        fields.insert("note".into(), Value::Str("loop entry".into()));

        let items = vec![
            SequenceItem::Call { name: "main".into() },
            SequenceItem::Push { name: "a".into(), value: Value::Int(1) },
            SequenceItem::Step { fields },
            SequenceItem::Return,
        ];

        let json = serde_json::to_string(&items).unwrap();
        let back: Vec<SequenceItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(items, back);
    }

    #[test]
    fn step_field_order_is_preserved() {
        let mut fields = StepFields::new();
        fields.insert("b".into(), Value::Int(2));
        fields.insert("a".into(), Value::Int(1));

        let keys: Vec<&String> = fields.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
