//! JSON-file-backed record store.
//!
//! The backing file holds a single JSON array of `{spelling, type}` objects.
//! Records are loaded once at open time and held in memory; each save
//! appends in memory and rewrites the whole file. Adequate for the small
//! single-node datasets this service is built for.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::record::Record;
use crate::store::{RecordStore, StoreError};

/// Durable store backed by a JSON file on local disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: RwLock<Vec<Record>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing records. A missing file
    /// is treated as an empty store and created on first save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, records: &[Record]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn snapshot(&self) -> Vec<Record> {
        self.records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn save(&self, record: Record) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.push(record);
        let result = self.write_all(&records);
        if result.is_err() {
            // Keep the in-memory set consistent with what is on disk.
            records.pop();
        }
        result
    }
}
