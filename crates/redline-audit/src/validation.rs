use serde::Serialize;

use redline_types::RecordId;

use crate::error::AuditError;
use crate::traits::AuditReader;

/// Result of validating one record's audit stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub record: RecordId,
    pub entry_count: u64,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific integrity violation detected during validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub seq: u64,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    SequenceGap,
    TimestampRegression,
    EmptyChangeSet,
    BlankActor,
}

/// Validate one record's audit stream: contiguous 1-based sequence,
/// non-decreasing timestamps, non-empty change sets, non-blank actors.
pub fn validate_stream<R: AuditReader>(
    reader: &R,
    record: &RecordId,
) -> Result<ValidationReport, AuditError> {
    let history = reader.history(record)?;
    let mut violations = Vec::new();

    // History is most-recent-first; walk it oldest-first.
    let mut previous_timestamp = None;
    for (index, entry) in history.iter().rev().enumerate() {
        let expected_seq = (index + 1) as u64;
        if entry.seq != expected_seq {
            violations.push(Violation {
                seq: entry.seq,
                kind: ViolationKind::SequenceGap,
                description: format!("expected seq {expected_seq}, found {}", entry.seq),
            });
        }

        if let Some(previous) = previous_timestamp {
            if entry.timestamp < previous {
                violations.push(Violation {
                    seq: entry.seq,
                    kind: ViolationKind::TimestampRegression,
                    description: "timestamp earlier than previous entry".into(),
                });
            }
        }
        previous_timestamp = Some(entry.timestamp);

        if entry.changes.is_empty() {
            violations.push(Violation {
                seq: entry.seq,
                kind: ViolationKind::EmptyChangeSet,
                description: "entry carries no changes".into(),
            });
        }

        if entry.actor.as_str().trim().is_empty() {
            violations.push(Violation {
                seq: entry.seq,
                kind: ViolationKind::BlankActor,
                description: "entry has no attribution".into(),
            });
        }
    }

    Ok(ValidationReport {
        record: record.clone(),
        entry_count: history.len() as u64,
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{AuditLog, Recorded};
    use crate::memory::InMemoryAuditLog;
    use redline_types::{ActorId, Record, RecordId};

    fn actor() -> ActorId {
        ActorId::new("auditor").unwrap()
    }

    fn log_edits(log: &AuditLog<InMemoryAuditLog>, id: &RecordId, summaries: &[&str]) {
        let mut current = Record::new(id.clone());
        for summary in summaries {
            let mut next = current.clone();
            next.summary = (*summary).into();
            let outcome = log.record(id, &current, &next, &actor());
            assert!(matches!(outcome, Recorded::Logged(_)));
            current = next;
        }
    }

    #[test]
    fn well_formed_stream_is_valid() {
        let log = AuditLog::new(InMemoryAuditLog::new());
        let id = RecordId::new();
        log_edits(&log, &id, &["a", "b", "c"]);

        let report = validate_stream(log.writer(), &id).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.entry_count, 3);
    }

    #[test]
    fn empty_stream_is_valid() {
        let log = InMemoryAuditLog::new();
        let report = validate_stream(&log, &RecordId::new()).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.entry_count, 0);
    }

    #[test]
    fn tampered_stream_is_flagged() {
        use crate::entry::AuditEntry;
        use crate::error::AuditError;
        use crate::traits::AuditReader;
        use redline_diff::ChangeSet;

        /// Reader double returning a stream with a gap and an empty entry.
        struct TamperedReader {
            id: RecordId,
        }

        impl AuditReader for TamperedReader {
            fn history(&self, _record: &RecordId) -> Result<Vec<AuditEntry>, AuditError> {
                let base = AuditEntry {
                    record: self.id.clone(),
                    seq: 1,
                    timestamp: chrono::Utc::now(),
                    actor: ActorId::new("auditor").unwrap(),
                    changes: ChangeSet::new(),
                };
                let mut skipped = base.clone();
                skipped.seq = 3;
                // Most-recent-first, like a real reader.
                Ok(vec![skipped, base])
            }

            fn entry_count(&self, _record: &RecordId) -> Result<u64, AuditError> {
                Ok(2)
            }

            fn records(&self) -> Result<Vec<RecordId>, AuditError> {
                Ok(vec![self.id.clone()])
            }
        }

        let id = RecordId::new();
        let reader = TamperedReader { id: id.clone() };
        let report = validate_stream(&reader, &id).unwrap();

        assert!(!report.is_valid());
        let kinds: Vec<ViolationKind> = report.violations.iter().map(|v| v.kind).collect();
        assert!(kinds.contains(&ViolationKind::SequenceGap));
        assert!(kinds.contains(&ViolationKind::EmptyChangeSet));
    }
}
