//! Persistence for completed candidate records.

mod json_file;

pub use json_file::JsonFileStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::intake::CompletedRecord;

/// Append-only collection of completed candidate records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Add one record to the collection.
    async fn append(&self, record: &CompletedRecord) -> Result<(), StoreError>;

    /// Every record stored so far, oldest first.
    async fn load_all(&self) -> Result<Vec<CompletedRecord>, StoreError>;
}
