//! Merge engine for redline.
//!
//! Reconciles an asynchronously-arriving extractor [`Proposal`] against the
//! live, possibly-being-edited [`Record`], under the current field lock set.
//! The engine is a pure function: it reads its three inputs, returns a new
//! record plus the set of fields it actually overwrote, and has no other
//! effects.
//!
//! # Per-field precedence
//!
//! 1. A locked field keeps its live value unchanged. The proposed value is
//!    never considered and the field is never reported as changed — the
//!    human's keystrokes are ground truth while they hold focus.
//! 2. Otherwise, if the proposal offers a usable value (present and
//!    non-empty, see `Proposal::offers`) that differs from the live value,
//!    the proposed value is adopted and the field is reported as changed.
//! 3. Otherwise the live value is kept.
//!
//! The extractor is additive-only and imperfect: it can never regress a
//! field to an empty or default value. Across deliveries, the most recently
//! delivered usable value wins for an unlocked field (last-write-wins in
//! delivery order); a proposed value is always re-derivable from the same
//! narrative, so freshness is preferred over retention.
//!
//! Proposed text is trimmed before comparison and adoption — surrounding
//! whitespace from the extractor is noise, not content.

use std::collections::{BTreeSet, HashSet};

use redline_types::{FieldName, Proposal, Record};

/// Result of merging a proposal into a live record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The reconciled record.
    pub merged: Record,
    /// The fields whose values were overwritten by the proposal.
    pub changed: BTreeSet<FieldName>,
}

impl MergeOutcome {
    /// Returns `true` if the merge adopted nothing.
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Reconcile `proposal` against `live` under `locks`.
///
/// Field processing order does not affect the outcome: each field's rule is
/// independent of every other field.
pub fn merge(live: &Record, proposal: &Proposal, locks: &HashSet<FieldName>) -> MergeOutcome {
    let mut merged = live.clone();
    let mut changed = BTreeSet::new();

    for field in FieldName::CONTENT {
        if locks.contains(&field) || !proposal.offers(field) {
            continue;
        }
        if adopt(&mut merged, proposal, field) {
            changed.insert(field);
        }
    }

    MergeOutcome { merged, changed }
}

/// Adopt the offered value for `field` into `merged` if it differs from the
/// live value. Returns `true` if the field was overwritten.
///
/// Callers have already established that the proposal offers `field`, so the
/// inner `Option`s are present; the `else` arms keep the function total
/// rather than panicking.
fn adopt(merged: &mut Record, proposal: &Proposal, field: FieldName) -> bool {
    match field {
        FieldName::Summary => adopt_text(&mut merged.summary, proposal.summary.as_deref()),
        FieldName::Antecedent => {
            adopt_text(&mut merged.antecedent, proposal.antecedent.as_deref())
        }
        FieldName::Behavior => adopt_text(&mut merged.behavior, proposal.behavior.as_deref()),
        FieldName::Consequence => {
            adopt_text(&mut merged.consequence, proposal.consequence.as_deref())
        }
        FieldName::Classification => {
            let Some(classification) = proposal.classification.as_ref() else {
                return false;
            };
            if *classification != merged.classification {
                merged.classification = classification.clone();
                return true;
            }
            false
        }
        FieldName::Functions => {
            let Some(functions) = proposal.functions.as_ref() else {
                return false;
            };
            if *functions != merged.functions {
                merged.functions = functions.clone();
                return true;
            }
            false
        }
        FieldName::OccurredDate => {
            if proposal.occurred_date != merged.occurred_date {
                merged.occurred_date = proposal.occurred_date;
                return true;
            }
            false
        }
        FieldName::OccurredTime => {
            if proposal.occurred_time != merged.occurred_time {
                merged.occurred_time = proposal.occurred_time;
                return true;
            }
            false
        }
        // Status is never offered by a proposal.
        FieldName::Status => false,
    }
}

fn adopt_text(live: &mut String, proposed: Option<&str>) -> bool {
    let Some(candidate) = proposed.map(str::trim).filter(|s| !s.is_empty()) else {
        return false;
    };
    if candidate != live {
        *live = candidate.to_string();
        return true;
    }
    false
}
