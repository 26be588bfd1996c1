use redline_diff::diff_records;
use redline_types::{ActorId, Record, RecordId};

use crate::entry::AuditEntry;
use crate::error::AuditError;
use crate::traits::{AuditReader, AuditWriter};

/// Outcome of one [`AuditLog::record`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recorded {
    /// The change set was non-empty and an entry was appended.
    Logged(AuditEntry),
    /// Old and new snapshots were identical; nothing was written.
    NoChange,
    /// The change set was non-empty but the append failed. The triggering
    /// mutation stands; only the audit entry is lost.
    Lost { error: AuditError },
}

impl Recorded {
    /// Returns `true` if an entry was appended.
    pub fn is_logged(&self) -> bool {
        matches!(self, Self::Logged(_))
    }
}

/// The diff-and-append audit operation over commit snapshots.
///
/// Mutation durability is prioritized over audit durability: by the time
/// `record` runs, the persistence layer has already accepted the mutation,
/// so a failed append is logged at `warn` and swallowed rather than rolled
/// back or propagated. Hosts that need lost-audit telemetry can inspect the
/// returned [`Recorded::Lost`].
#[derive(Debug, Default)]
pub struct AuditLog<W> {
    writer: W,
}

impl<W: AuditWriter> AuditLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Diff `old` against `new` and append an attributed entry if anything
    /// changed. A no-op mutation never appends.
    pub fn record(
        &self,
        record: &RecordId,
        old: &Record,
        new: &Record,
        actor: &ActorId,
    ) -> Recorded {
        let changes = diff_records(old, new);
        if changes.is_empty() {
            return Recorded::NoChange;
        }

        match self.writer.append(record, actor, changes) {
            Ok(entry) => Recorded::Logged(entry),
            Err(error) => {
                tracing::warn!(
                    record = %record,
                    %actor,
                    %error,
                    "audit entry lost; record mutation stands"
                );
                Recorded::Lost { error }
            }
        }
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: AuditWriter + AuditReader> AuditLog<W> {
    /// Entries for one record, most-recent-first.
    pub fn history(&self, record: &RecordId) -> Result<Vec<AuditEntry>, AuditError> {
        self.writer.history(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryAuditLog;
    use redline_diff::ChangeSet;
    use redline_types::{FieldName, RecordStatus};
    use serde_json::json;

    /// Writer double whose appends always fail.
    struct FailingWriter;

    impl AuditWriter for FailingWriter {
        fn append(
            &self,
            _record: &RecordId,
            _actor: &ActorId,
            _changes: ChangeSet,
        ) -> Result<AuditEntry, AuditError> {
            Err(AuditError::Backend("disk full".into()))
        }
    }

    fn actor() -> ActorId {
        ActorId::new("op").unwrap()
    }

    #[test]
    fn no_op_mutation_appends_nothing() {
        let log = AuditLog::new(InMemoryAuditLog::new());
        let record = Record::new(RecordId::new());

        let outcome = log.record(&record.id, &record, &record.clone(), &actor());
        assert_eq!(outcome, Recorded::NoChange);
        assert!(log.history(&record.id).unwrap().is_empty());
    }

    #[test]
    fn mutation_appends_exactly_the_diff() {
        let log = AuditLog::new(InMemoryAuditLog::new());
        let old = Record::new(RecordId::new());
        let mut new = old.clone();
        new.summary = "b".into();
        new.status = RecordStatus::Finalized;

        let outcome = log.record(&old.id, &old, &new, &actor());
        let Recorded::Logged(entry) = outcome else {
            panic!("expected a logged entry");
        };

        assert_eq!(entry.seq, 1);
        assert_eq!(entry.actor, actor());
        assert_eq!(entry.changes.len(), 2);
        assert_eq!(entry.changes.get(FieldName::Summary).unwrap().new, json!("b"));
        assert_eq!(
            entry.changes.get(FieldName::Status).unwrap().new,
            json!("finalized")
        );

        let history = log.history(&old.id).unwrap();
        assert_eq!(history, vec![entry]);
    }

    #[test]
    fn append_failure_is_swallowed() {
        let log = AuditLog::new(FailingWriter);
        let old = Record::new(RecordId::new());
        let mut new = old.clone();
        new.summary = "lost to history".into();

        let outcome = log.record(&old.id, &old, &new, &actor());
        assert_eq!(
            outcome,
            Recorded::Lost {
                error: AuditError::Backend("disk full".into())
            }
        );
        assert!(!outcome.is_logged());
    }

    #[test]
    fn append_failure_on_no_change_is_unreachable() {
        // An empty diff returns before the writer is ever consulted, so even
        // a broken writer reports NoChange.
        let log = AuditLog::new(FailingWriter);
        let record = Record::new(RecordId::new());

        let outcome = log.record(&record.id, &record, &record.clone(), &actor());
        assert_eq!(outcome, Recorded::NoChange);
    }
}
