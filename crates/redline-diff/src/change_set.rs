use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use redline_types::{FieldName, Record};

/// The `{old, new}` value pair for one changed field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub old: Value,
    pub new: Value,
}

/// Field-level difference between two record snapshots.
///
/// Only fields whose canonical serialized values differ appear; a field with
/// equal old and new values is never present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    changes: BTreeMap<FieldName, FieldChange>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changed fields.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// The change for `field`, if it changed.
    pub fn get(&self, field: FieldName) -> Option<&FieldChange> {
        self.changes.get(&field)
    }

    /// Returns `true` if `field` changed.
    pub fn contains(&self, field: FieldName) -> bool {
        self.changes.contains_key(&field)
    }

    /// The changed fields, in canonical field order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.changes.keys().copied()
    }

    /// Iterate over `(field, change)` pairs in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldChange)> {
        self.changes.iter().map(|(field, change)| (*field, change))
    }
}

/// Compute the diff between two state maps.
///
/// Keys present in either map are compared; a key missing on one side is
/// treated as `null` there. Equal values never produce an entry.
pub fn diff_states(
    old: &BTreeMap<FieldName, Value>,
    new: &BTreeMap<FieldName, Value>,
) -> ChangeSet {
    let mut changes = BTreeMap::new();

    for field in old.keys().chain(new.keys()) {
        if changes.contains_key(field) {
            continue;
        }
        let old_val = old.get(field).cloned().unwrap_or(Value::Null);
        let new_val = new.get(field).cloned().unwrap_or(Value::Null);
        if old_val != new_val {
            changes.insert(
                *field,
                FieldChange {
                    old: old_val,
                    new: new_val,
                },
            );
        }
    }

    ChangeSet { changes }
}

/// Compute the field-level diff between two record snapshots.
pub fn diff_records(old: &Record, new: &Record) -> ChangeSet {
    diff_states(&old.field_values(), &new.field_values())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline_types::{Classification, FunctionTag, RecordId, RecordStatus};
    use serde_json::json;

    fn record() -> Record {
        Record::new(RecordId::new())
    }

    #[test]
    fn identical_records_no_diff() {
        let mut a = record();
        a.summary = "left the room".into();
        a.functions = vec![FunctionTag::Escape];

        let diff = diff_records(&a, &a.clone());
        assert!(diff.is_empty());
        assert_eq!(diff.len(), 0);
    }

    #[test]
    fn empty_diff_for_empty_records() {
        let a = record();
        let diff = diff_records(&a, &a.clone());
        assert!(diff.is_empty());
    }

    #[test]
    fn single_field_modification() {
        let old = record();
        let mut new = old.clone();
        new.behavior = "pushed chair".into();

        let diff = diff_records(&old, &new);
        assert_eq!(diff.len(), 1);
        assert!(diff.contains(FieldName::Behavior));

        let change = diff.get(FieldName::Behavior).unwrap();
        assert_eq!(change.old, json!(""));
        assert_eq!(change.new, json!("pushed chair"));
    }

    #[test]
    fn mixed_changes() {
        let mut old = record();
        old.summary = "a".into();
        old.classification = Classification::Aggression;

        let mut new = old.clone();
        new.summary = "b".into();
        new.status = RecordStatus::Finalized;

        let diff = diff_records(&old, &new);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff.get(FieldName::Summary).unwrap().new, json!("b"));
        assert_eq!(
            diff.get(FieldName::Status).unwrap(),
            &FieldChange {
                old: json!("draft"),
                new: json!("finalized"),
            }
        );
        assert!(!diff.contains(FieldName::Classification));
    }

    #[test]
    fn tag_reorder_is_a_change() {
        let mut old = record();
        old.functions = vec![FunctionTag::Escape, FunctionTag::Attention];
        let mut new = old.clone();
        new.functions = vec![FunctionTag::Attention, FunctionTag::Escape];

        let diff = diff_records(&old, &new);
        assert_eq!(diff.len(), 1);
        assert!(diff.contains(FieldName::Functions));
    }

    #[test]
    fn date_cleared_by_human_edit_is_a_change() {
        let mut old = record();
        old.occurred_date = chrono::NaiveDate::from_ymd_opt(2026, 5, 2);
        let mut new = old.clone();
        new.occurred_date = None;

        let diff = diff_records(&old, &new);
        let change = diff.get(FieldName::OccurredDate).unwrap();
        assert_eq!(change.old, json!("2026-05-02"));
        assert_eq!(change.new, Value::Null);
    }

    #[test]
    fn fields_iterate_in_canonical_order() {
        let old = record();
        let mut new = old.clone();
        new.status = RecordStatus::Finalized;
        new.summary = "s".into();

        let diff = diff_records(&old, &new);
        let fields: Vec<FieldName> = diff.fields().collect();
        assert_eq!(fields, vec![FieldName::Summary, FieldName::Status]);
    }

    #[test]
    fn diff_states_treats_missing_as_null() {
        let mut old = BTreeMap::new();
        old.insert(FieldName::Summary, json!("gone"));
        let new = BTreeMap::new();

        let diff = diff_states(&old, &new);
        assert_eq!(diff.len(), 1);
        assert_eq!(
            diff.get(FieldName::Summary).unwrap(),
            &FieldChange {
                old: json!("gone"),
                new: Value::Null,
            }
        );
    }

    #[test]
    fn serde_roundtrip() {
        let old = record();
        let mut new = old.clone();
        new.antecedent = "asked to wait".into();

        let diff = diff_records(&old, &new);
        let json = serde_json::to_string(&diff).unwrap();
        let parsed: ChangeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(diff, parsed);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use redline_types::{FunctionTag, RecordId, RecordStatus};

    fn arb_tag() -> impl Strategy<Value = FunctionTag> {
        prop_oneof![
            Just(FunctionTag::Attention),
            Just(FunctionTag::Escape),
            Just(FunctionTag::Tangible),
            Just(FunctionTag::Sensory),
        ]
    }

    fn arb_record() -> impl Strategy<Value = Record> {
        (
            "[ a-z]{0,12}",
            "[ a-z]{0,12}",
            prop::collection::vec(arb_tag(), 0..4),
            prop::bool::ANY,
        )
            .prop_map(|(summary, behavior, functions, finalized)| {
                let mut record = Record::new(RecordId::new());
                record.summary = summary;
                record.behavior = behavior;
                record.functions = functions;
                if finalized {
                    record.status = RecordStatus::Finalized;
                }
                record
            })
    }

    proptest! {
        #[test]
        fn self_diff_is_empty(record in arb_record()) {
            prop_assert!(diff_records(&record, &record.clone()).is_empty());
        }

        #[test]
        fn diff_reports_exactly_the_differing_fields(
            old in arb_record(),
            new in arb_record(),
        ) {
            let diff = diff_records(&old, &new);
            for field in FieldName::ALL {
                let differs = old.field_value(field) != new.field_value(field);
                prop_assert_eq!(diff.contains(field), differs);
            }
        }
    }
}
