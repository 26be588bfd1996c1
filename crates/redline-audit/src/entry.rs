use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use redline_diff::ChangeSet;
use redline_types::{ActorId, RecordId};

/// An immutable record of one accepted mutation's change set.
///
/// Entries are append-only: once written they are never mutated or deleted.
/// `seq` is server-assigned, 1-based, and strictly increasing within a
/// record's stream; timestamps are likewise non-decreasing per stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub record: RecordId,
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub actor: ActorId,
    pub changes: ChangeSet,
}
