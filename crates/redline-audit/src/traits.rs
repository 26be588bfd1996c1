use redline_diff::ChangeSet;
use redline_types::{ActorId, RecordId};

use crate::entry::AuditEntry;
use crate::error::AuditError;

/// Write boundary for audit log appends.
///
/// `append` assigns the entry's position (seq and timestamp) server-side;
/// callers supply only the attribution and the non-empty change set.
pub trait AuditWriter: Send + Sync {
    fn append(
        &self,
        record: &RecordId,
        actor: &ActorId,
        changes: ChangeSet,
    ) -> Result<AuditEntry, AuditError>;
}

/// Read boundary for audit log queries.
pub trait AuditReader: Send + Sync {
    /// Entries for one record, most-recent-first.
    fn history(&self, record: &RecordId) -> Result<Vec<AuditEntry>, AuditError>;

    /// Number of entries for one record.
    fn entry_count(&self, record: &RecordId) -> Result<u64, AuditError>;

    /// All record ids with at least one entry, in id order.
    fn records(&self) -> Result<Vec<RecordId>, AuditError>;
}
