use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The closed set of fields on an incident record.
///
/// `Status` is special: it is changed only by explicit human action
/// (finalization), never by the extractor, so it is excluded from
/// [`FieldName::CONTENT`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Summary,
    Antecedent,
    Behavior,
    Consequence,
    Classification,
    Functions,
    OccurredDate,
    OccurredTime,
    Status,
}

impl FieldName {
    /// Every record field, in canonical order.
    pub const ALL: [FieldName; 9] = [
        FieldName::Summary,
        FieldName::Antecedent,
        FieldName::Behavior,
        FieldName::Consequence,
        FieldName::Classification,
        FieldName::Functions,
        FieldName::OccurredDate,
        FieldName::OccurredTime,
        FieldName::Status,
    ];

    /// The extractor-writable subset: every field except `Status`.
    pub const CONTENT: [FieldName; 8] = [
        FieldName::Summary,
        FieldName::Antecedent,
        FieldName::Behavior,
        FieldName::Consequence,
        FieldName::Classification,
        FieldName::Functions,
        FieldName::OccurredDate,
        FieldName::OccurredTime,
    ];

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Antecedent => "antecedent",
            Self::Behavior => "behavior",
            Self::Consequence => "consequence",
            Self::Classification => "classification",
            Self::Functions => "functions",
            Self::OccurredDate => "occurred_date",
            Self::OccurredTime => "occurred_time",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| TypeError::UnknownField(s.to_string()))
    }
}

/// Incident classification tag.
///
/// `Unclassified` is the generic fallback category: a proposal carrying it
/// conveys no information and is treated as absent during merge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    #[default]
    Unclassified,
    Aggression,
    SelfInjury,
    Elopement,
    PropertyDamage,
    Other(String),
}

impl Classification {
    /// Returns `true` for the generic fallback category.
    pub fn is_unclassified(&self) -> bool {
        matches!(self, Self::Unclassified)
    }

    /// Lenient construction from a loose label.
    ///
    /// Known labels map to their variant, a blank label maps to
    /// `Unclassified`, anything else is preserved as `Other`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "unclassified" => Self::Unclassified,
            "aggression" => Self::Aggression,
            "self_injury" | "self-injury" => Self::SelfInjury,
            "elopement" => Self::Elopement,
            "property_damage" | "property-damage" => Self::PropertyDamage,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unclassified => write!(f, "unclassified"),
            Self::Aggression => write!(f, "aggression"),
            Self::SelfInjury => write!(f, "self_injury"),
            Self::Elopement => write!(f, "elopement"),
            Self::PropertyDamage => write!(f, "property_damage"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Hypothesized behavioral function of an incident.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionTag {
    Attention,
    Escape,
    Tangible,
    Sensory,
}

impl FunctionTag {
    /// Lenient construction from a loose label; `None` for unknown labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "attention" => Some(Self::Attention),
            "escape" => Some(Self::Escape),
            "tangible" => Some(Self::Tangible),
            "sensory" => Some(Self::Sensory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attention => "attention",
            Self::Escape => "escape",
            Self::Tangible => "tangible",
            Self::Sensory => "sensory",
        }
    }
}

impl fmt::Display for FunctionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FunctionTag {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| TypeError::UnknownFunctionTag(s.to_string()))
    }
}

/// Lifecycle status of a record.
///
/// A record transitions from `Draft` to `Finalized` exactly once, by explicit
/// human action. Finalized records are semantically complete but remain
/// editable; the audit trail is the compensating control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Draft,
    Finalized,
}

impl RecordStatus {
    pub fn is_finalized(&self) -> bool {
        matches!(self, Self::Finalized)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Finalized => write!(f, "finalized"),
        }
    }
}

impl FromStr for RecordStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "finalized" => Ok(Self::Finalized),
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_content_plus_status() {
        assert_eq!(FieldName::ALL.len(), FieldName::CONTENT.len() + 1);
        assert!(!FieldName::CONTENT.contains(&FieldName::Status));
        for field in FieldName::CONTENT {
            assert!(FieldName::ALL.contains(&field));
        }
    }

    #[test]
    fn field_name_roundtrip() {
        for field in FieldName::ALL {
            let parsed: FieldName = field.as_str().parse().unwrap();
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn field_name_matches_serde_representation() {
        for field in FieldName::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn unknown_field_rejected() {
        let error = "severity".parse::<FieldName>().unwrap_err();
        assert_eq!(error, TypeError::UnknownField("severity".into()));
    }

    #[test]
    fn classification_from_label_maps_known_names() {
        assert_eq!(
            Classification::from_label("Aggression"),
            Classification::Aggression
        );
        assert_eq!(
            Classification::from_label("self-injury"),
            Classification::SelfInjury
        );
        assert_eq!(Classification::from_label(""), Classification::Unclassified);
        assert_eq!(
            Classification::from_label("biting"),
            Classification::Other("biting".into())
        );
    }

    #[test]
    fn default_classification_is_fallback() {
        assert!(Classification::default().is_unclassified());
    }

    #[test]
    fn function_tag_from_label() {
        assert_eq!(
            FunctionTag::from_label(" Escape "),
            Some(FunctionTag::Escape)
        );
        assert_eq!(FunctionTag::from_label("boredom"), None);
    }

    #[test]
    fn status_roundtrip() {
        assert_eq!("draft".parse::<RecordStatus>().unwrap(), RecordStatus::Draft);
        assert_eq!(
            "finalized".parse::<RecordStatus>().unwrap(),
            RecordStatus::Finalized
        );
        assert!("signed".parse::<RecordStatus>().is_err());
    }

    #[test]
    fn default_status_is_draft() {
        assert_eq!(RecordStatus::default(), RecordStatus::Draft);
        assert!(!RecordStatus::default().is_finalized());
    }
}
