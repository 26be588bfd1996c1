//! Record persistence boundary for redline.
//!
//! Persistence is a key-value store keyed by record identifier. The one
//! contract that matters to the rest of the system is [`RecordStore::commit`]:
//! it returns *both* the prior stored snapshot and the new one, produced
//! atomically, so the audit layer can diff the pair without racing a
//! concurrent writer.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRecordStore;
pub use traits::{Committed, RecordStore};
