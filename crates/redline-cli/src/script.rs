//! JSON session scripts.
//!
//! A script is the serialized form of one editing session's event stream:
//!
//! ```json
//! {
//!   "events": [
//!     { "event": "focus", "field": "antecedent" },
//!     { "event": "edit", "field": "antecedent", "value": "asked to wait" },
//!     { "event": "propose", "fields": { "behavior": "left the room" } },
//!     { "event": "blur", "field": "antecedent" },
//!     { "event": "commit", "actor": "j.doe" },
//!     { "event": "finalize", "signature": "j.doe" }
//!   ]
//! }
//! ```
//!
//! `propose` payloads go through the same lenient decoding as real extractor
//! output: malformed fields degrade to absent. `edit` payloads are operator
//! input and are decoded strictly.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::Value;

use redline_session::{FieldEdit, SessionConfig};
use redline_types::{Classification, FieldName, FunctionTag};

/// One scripted editing session.
#[derive(Debug, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub config: Option<SessionConfig>,
    pub events: Vec<ScriptEvent>,
}

/// One event on the session's logical event queue.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Focus { field: FieldName },
    Blur { field: FieldName },
    Edit { field: FieldName, value: Value },
    Propose { fields: Value },
    Commit { actor: String },
    Finalize { signature: String },
}

/// Decode a strict operator edit.
pub fn to_field_edit(field: FieldName, value: &Value) -> Result<FieldEdit> {
    let edit = match field {
        FieldName::Summary => FieldEdit::Summary(required_text(field, value)?),
        FieldName::Antecedent => FieldEdit::Antecedent(required_text(field, value)?),
        FieldName::Behavior => FieldEdit::Behavior(required_text(field, value)?),
        FieldName::Consequence => FieldEdit::Consequence(required_text(field, value)?),
        FieldName::Classification => {
            FieldEdit::Classification(Classification::from_label(&required_text(field, value)?))
        }
        FieldName::Functions => {
            let items = value
                .as_array()
                .with_context(|| format!("edit of {field} requires an array of tags"))?;
            let mut tags = Vec::with_capacity(items.len());
            for item in items {
                let label = item
                    .as_str()
                    .with_context(|| format!("edit of {field}: tags must be strings"))?;
                tags.push(label.parse::<FunctionTag>()?);
            }
            FieldEdit::Functions(tags)
        }
        FieldName::OccurredDate => FieldEdit::OccurredDate(optional_date(field, value)?),
        FieldName::OccurredTime => FieldEdit::OccurredTime(optional_time(field, value)?),
        FieldName::Status => bail!("status is not directly editable; use a finalize event"),
    };
    Ok(edit)
}

fn required_text(field: FieldName, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .with_context(|| format!("edit of {field} requires a string value"))
}

fn optional_date(field: FieldName, value: &Value) -> Result<Option<NaiveDate>> {
    if value.is_null() {
        return Ok(None);
    }
    let text = value
        .as_str()
        .with_context(|| format!("edit of {field} requires a YYYY-MM-DD string or null"))?;
    let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .with_context(|| format!("edit of {field}: invalid date {text:?}"))?;
    Ok(Some(date))
}

fn optional_time(field: FieldName, value: &Value) -> Result<Option<NaiveTime>> {
    if value.is_null() {
        return Ok(None);
    }
    let text = value
        .as_str()
        .with_context(|| format!("edit of {field} requires an HH:MM[:SS] string or null"))?;
    let trimmed = text.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .with_context(|| format!("edit of {field}: invalid time {text:?}"))?;
    Ok(Some(time))
}
