use std::collections::HashMap;
use std::sync::RwLock;

use redline_types::{Record, RecordId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{Committed, RecordStore};

/// In-memory record store for tests, local demos, and embedding.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<HashMap<RecordId, Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self, id: &RecordId) -> StoreResult<Option<Record>> {
        let records = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(id).cloned())
    }

    fn commit(&self, record: &Record) -> StoreResult<Committed> {
        let mut records = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        let old = records
            .get(&record.id)
            .cloned()
            .unwrap_or_else(|| Record::new(record.id.clone()));
        records.insert(record.id.clone(), record.clone());

        Ok(Committed {
            old,
            new: record.clone(),
        })
    }

    fn exists(&self, id: &RecordId) -> StoreResult<bool> {
        let records = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.contains_key(id))
    }

    fn records(&self) -> StoreResult<Vec<RecordId>> {
        let records = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut ids: Vec<RecordId> = records.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
