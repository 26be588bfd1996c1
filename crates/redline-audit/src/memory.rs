use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, TimeDelta, Utc};

use redline_diff::ChangeSet;
use redline_types::{ActorId, RecordId};

use crate::entry::AuditEntry;
use crate::error::AuditError;
use crate::traits::{AuditReader, AuditWriter};

/// In-memory audit log for tests, local demos, and embedding.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    inner: RwLock<HashMap<RecordId, Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditWriter for InMemoryAuditLog {
    fn append(
        &self,
        record: &RecordId,
        actor: &ActorId,
        changes: ChangeSet,
    ) -> Result<AuditEntry, AuditError> {
        let mut streams = self.inner.write().map_err(|_| AuditError::LockPoisoned)?;

        let stream = streams.entry(record.clone()).or_default();
        let seq = (stream.len() + 1) as u64;
        let timestamp = next_timestamp(stream.last());

        let entry = AuditEntry {
            record: record.clone(),
            seq,
            timestamp,
            actor: actor.clone(),
            changes,
        };
        stream.push(entry.clone());

        Ok(entry)
    }
}

impl AuditReader for InMemoryAuditLog {
    fn history(&self, record: &RecordId) -> Result<Vec<AuditEntry>, AuditError> {
        let streams = self.inner.read().map_err(|_| AuditError::LockPoisoned)?;

        let mut entries = streams.get(record).cloned().unwrap_or_default();
        entries.reverse();
        Ok(entries)
    }

    fn entry_count(&self, record: &RecordId) -> Result<u64, AuditError> {
        let streams = self.inner.read().map_err(|_| AuditError::LockPoisoned)?;
        Ok(streams.get(record).map(|s| s.len() as u64).unwrap_or(0))
    }

    fn records(&self) -> Result<Vec<RecordId>, AuditError> {
        let streams = self.inner.read().map_err(|_| AuditError::LockPoisoned)?;
        let mut ids: Vec<RecordId> = streams.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

/// Wall-clock timestamp forced strictly after the previous entry's, so a
/// stream stays timestamp-ordered even when two appends land in the same
/// clock tick.
fn next_timestamp(last: Option<&AuditEntry>) -> DateTime<Utc> {
    let now = Utc::now();
    match last {
        Some(previous) if now <= previous.timestamp => {
            previous.timestamp + TimeDelta::milliseconds(1)
        }
        _ => now,
    }
}
