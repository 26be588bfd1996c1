use chrono::{NaiveDate, NaiveTime};

use redline_types::{Classification, FieldName, FunctionTag, Record};

/// A direct human edit to one record field.
///
/// Unlike an extractor proposal, a human edit may clear a field (empty
/// string, empty tag list, `None` date) — the operator's input is ground
/// truth. Lifecycle status is not editable this way; it changes only
/// through finalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEdit {
    Summary(String),
    Antecedent(String),
    Behavior(String),
    Consequence(String),
    Classification(Classification),
    Functions(Vec<FunctionTag>),
    OccurredDate(Option<NaiveDate>),
    OccurredTime(Option<NaiveTime>),
}

impl FieldEdit {
    /// The field this edit targets.
    pub fn field(&self) -> FieldName {
        match self {
            Self::Summary(_) => FieldName::Summary,
            Self::Antecedent(_) => FieldName::Antecedent,
            Self::Behavior(_) => FieldName::Behavior,
            Self::Consequence(_) => FieldName::Consequence,
            Self::Classification(_) => FieldName::Classification,
            Self::Functions(_) => FieldName::Functions,
            Self::OccurredDate(_) => FieldName::OccurredDate,
            Self::OccurredTime(_) => FieldName::OccurredTime,
        }
    }

    /// Apply this edit to `record`.
    pub fn apply(self, record: &mut Record) {
        match self {
            Self::Summary(value) => record.summary = value,
            Self::Antecedent(value) => record.antecedent = value,
            Self::Behavior(value) => record.behavior = value,
            Self::Consequence(value) => record.consequence = value,
            Self::Classification(value) => record.classification = value,
            Self::Functions(value) => record.functions = value,
            Self::OccurredDate(value) => record.occurred_date = value,
            Self::OccurredTime(value) => record.occurred_time = value,
        }
    }
}
