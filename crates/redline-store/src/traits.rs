use redline_types::{Record, RecordId};

use crate::error::StoreResult;

/// The prior and new stored snapshots of one committed record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Committed {
    /// The snapshot that was stored before this commit. For a record's
    /// first commit this is the empty draft with the same id, so the diff
    /// against it captures every initially populated field.
    pub old: Record,
    /// The snapshot stored by this commit.
    pub new: Record,
}

/// Key-value record storage.
///
/// All implementations must satisfy these invariants:
/// - `commit` is a single atomic read-modify-write per record: the returned
///   old/new pair is taken under one write exclusion, so no other writer can
///   interleave between them.
/// - Reads of absent records return `Ok(None)`, never an error.
/// - The store never interprets record contents and never rejects an edit to
///   a finalized record; lifecycle policy lives above this boundary.
/// - I/O errors are propagated, never silently ignored.
pub trait RecordStore: Send + Sync {
    /// Read the stored snapshot of a record.
    fn load(&self, id: &RecordId) -> StoreResult<Option<Record>>;

    /// Store `record`, returning the prior and new snapshots atomically.
    fn commit(&self, record: &Record) -> StoreResult<Committed>;

    /// Check whether a record exists in the store.
    fn exists(&self, id: &RecordId) -> StoreResult<bool>;

    /// All stored record ids, in id order.
    fn records(&self) -> StoreResult<Vec<RecordId>>;
}
