use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::{Classification, FieldName, FunctionTag, RecordStatus};
use crate::id::RecordId;

/// The structured incident record being composed and eventually persisted.
///
/// Identity lives in `id` and is not a field: the field set is exactly
/// [`FieldName::ALL`], and [`Record::field_values`] is the canonical
/// state-map view used for diffing and merging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub summary: String,
    pub antecedent: String,
    pub behavior: String,
    pub consequence: String,
    pub classification: Classification,
    pub functions: Vec<FunctionTag>,
    pub occurred_date: Option<NaiveDate>,
    pub occurred_time: Option<NaiveTime>,
    pub status: RecordStatus,
}

impl Record {
    /// Create an empty draft record.
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            summary: String::new(),
            antecedent: String::new(),
            behavior: String::new(),
            consequence: String::new(),
            classification: Classification::Unclassified,
            functions: Vec::new(),
            occurred_date: None,
            occurred_time: None,
            status: RecordStatus::Draft,
        }
    }

    /// The canonical serialized value of a single field.
    pub fn field_value(&self, field: FieldName) -> Value {
        match field {
            FieldName::Summary => canonical(&self.summary),
            FieldName::Antecedent => canonical(&self.antecedent),
            FieldName::Behavior => canonical(&self.behavior),
            FieldName::Consequence => canonical(&self.consequence),
            FieldName::Classification => canonical(&self.classification),
            FieldName::Functions => canonical(&self.functions),
            FieldName::OccurredDate => canonical(&self.occurred_date),
            FieldName::OccurredTime => canonical(&self.occurred_time),
            FieldName::Status => canonical(&self.status),
        }
    }

    /// The canonical state-map view over every field.
    pub fn field_values(&self) -> BTreeMap<FieldName, Value> {
        FieldName::ALL
            .into_iter()
            .map(|field| (field, self.field_value(field)))
            .collect()
    }
}

/// Serialize a field value, falling back to its canonical string rendering
/// for values that cannot be structurally represented.
fn canonical<T: Serialize + fmt::Debug>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::String(format!("{value:?}")))
}
