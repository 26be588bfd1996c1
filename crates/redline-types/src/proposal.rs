use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::{Classification, FieldName, FunctionTag};

/// A partial record emitted by the narrative extractor.
///
/// Absence of a field means "no new information", never "clear this field":
/// the extractor only adds, it never retracts. A proposal carries no record
/// id and no lifecycle status — status is changed only by explicit human
/// action.
///
/// A field can also be present but *empty* (a blank string, an empty tag
/// list, the generic fallback classification); such a field conveys nothing
/// and [`Proposal::offers`] reports it as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proposal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antecedent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consequence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<FunctionTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_time: Option<NaiveTime>,
}

impl Proposal {
    /// A proposal carrying no information at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the proposal offers a usable value for `field`.
    ///
    /// "Usable" means present and non-empty: non-blank after trimming for
    /// text fields, a non-empty tag list for `functions`, any value other
    /// than the generic fallback for `classification`. `Status` is never
    /// offered.
    pub fn offers(&self, field: FieldName) -> bool {
        match field {
            FieldName::Summary => offers_text(self.summary.as_deref()),
            FieldName::Antecedent => offers_text(self.antecedent.as_deref()),
            FieldName::Behavior => offers_text(self.behavior.as_deref()),
            FieldName::Consequence => offers_text(self.consequence.as_deref()),
            FieldName::Classification => self
                .classification
                .as_ref()
                .is_some_and(|c| !c.is_unclassified()),
            FieldName::Functions => self.functions.as_ref().is_some_and(|t| !t.is_empty()),
            FieldName::OccurredDate => self.occurred_date.is_some(),
            FieldName::OccurredTime => self.occurred_time.is_some(),
            FieldName::Status => false,
        }
    }

    /// The set of fields for which this proposal offers a usable value.
    pub fn offered_fields(&self) -> BTreeSet<FieldName> {
        FieldName::CONTENT
            .into_iter()
            .filter(|field| self.offers(*field))
            .collect()
    }

    /// Returns `true` if the proposal offers nothing.
    pub fn is_empty(&self) -> bool {
        self.offered_fields().is_empty()
    }

    /// Lenient construction from a loose JSON object.
    ///
    /// The extractor is an external, imperfect service: a field of an
    /// unexpected shape degrades to "absent" rather than failing the whole
    /// proposal. Unknown keys are ignored. A non-object input yields an
    /// empty proposal.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::empty();
        };

        Self {
            summary: loose_text(map.get("summary")),
            antecedent: loose_text(map.get("antecedent")),
            behavior: loose_text(map.get("behavior")),
            consequence: loose_text(map.get("consequence")),
            classification: loose_classification(map.get("classification")),
            functions: loose_functions(map.get("functions")),
            occurred_date: loose_date(map.get("occurred_date")),
            occurred_time: loose_time(map.get("occurred_time")),
        }
    }
}

fn offers_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

fn loose_text(value: Option<&Value>) -> Option<String> {
    value?.as_str().map(str::to_string)
}

fn loose_classification(value: Option<&Value>) -> Option<Classification> {
    Some(Classification::from_label(value?.as_str()?))
}

fn loose_functions(value: Option<&Value>) -> Option<Vec<FunctionTag>> {
    let items = value?.as_array()?;
    // Unknown or non-string tags are dropped, not errors.
    let tags: Vec<FunctionTag> = items
        .iter()
        .filter_map(|item| item.as_str())
        .filter_map(FunctionTag::from_label)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

fn loose_date(value: Option<&Value>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value?.as_str()?.trim(), "%Y-%m-%d").ok()
}

fn loose_time(value: Option<&Value>) -> Option<NaiveTime> {
    let text = value?.as_str()?.trim();
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()
}
