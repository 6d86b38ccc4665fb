//! Record persistence collaborators.
//!
//! # Data Flow
//! ```text
//! GET  → store.snapshot() → handler scans the materialized records
//! POST → handler validates → persist slot → store.save(record)
//! ```
//!
//! # Design Decisions
//! - The handler never talks to storage directly; it receives a snapshot and
//!   emits an optional record to persist
//! - Stores are internally synchronized; callers hold no locks
//! - Save failures surface as `StoreError`, never as panics

pub mod file;
pub mod memory;

use thiserror::Error;

use crate::record::Record;

/// Errors that can occur while persisting records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not contain a valid record array.
    #[error("storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Capability interface for the external persistence system.
pub trait RecordStore: Send + Sync {
    /// Materialize every stored record, in insertion order.
    fn snapshot(&self) -> Vec<Record>;

    /// Durably persist one record, exactly as given.
    fn save(&self, record: Record) -> Result<(), StoreError>;
}

pub use file::JsonFileStore;
pub use memory::MemoryStore;
