//! In-memory record store.

use std::sync::RwLock;

use crate::record::Record;
use crate::store::{RecordStore, StoreError};

/// Volatile store backed by a `Vec`. Used for tests and ephemeral
/// deployments; records are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordStore for MemoryStore {
    fn snapshot(&self) -> Vec<Record> {
        // A poisoned lock only means a writer panicked mid-push; the Vec is
        // still usable.
        self.records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn save(&self, record: Record) -> Result<(), StoreError> {
        self.records
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(record);
        Ok(())
    }
}
