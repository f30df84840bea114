//! JSON-array record store on the local filesystem.
//!
//! Each append reads the whole array, pushes one record and writes the whole
//! array back through a temp file and rename. Appends from this process are
//! serialized; separate processes sharing the file can still lose writes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::intake::CompletedRecord;

use super::RecordStore;

pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<CompletedRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_records(&self, records: &[CompletedRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await.map_err(write_err)?;
        fs::rename(&tmp, &self.path).await.map_err(write_err)?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn append(&self, record: &CompletedRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_records().await?;
        records.push(record.clone());
        self.write_records(&records).await?;
        tracing::info!(
            path = %self.path.display(),
            total = records.len(),
            "Candidate record saved"
        );
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<CompletedRecord>, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.read_records().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Utc;
    use uuid::Uuid;

    use crate::intake::CandidateRecord;

    fn record(name: &str) -> CompletedRecord {
        CompletedRecord {
            session_id: Uuid::new_v4(),
            candidate: CandidateRecord {
                name: name.to_string(),
                email: format!("{}@x.com", name.to_lowercase()),
                phone: "1234567890".into(),
                experience: "2".into(),
                position: "Engineer".into(),
                location: "Remote".into(),
                tech_stack: "Rust".into(),
            },
            completed_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("candidates.json"));
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_keeps_existing_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("candidates.json"));

        store.append(&record("Ada")).await.unwrap();
        store.append(&record("Grace")).await.unwrap();

        let all = store.load_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].candidate.name, "Ada");
        assert_eq!(all[1].candidate.name, "Grace");
        assert!(!dir.path().join("candidates.json.tmp").exists());
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/intake/candidates.json");
        let store = JsonFileStore::new(&path);
        store.append(&record("Ada")).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn file_is_a_json_array_of_flat_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidates.json");
        let store = JsonFileStore::new(&path);
        store.append(&record("Ada")).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "Ada");
        assert!(entries[0]["completed_at"].is_string());
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidates.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.append(&record("Ada")).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        // The unreadable file is left as it was.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("candidates.json")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.append(&record(&format!("C{i}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.load_all().await.unwrap().len(), 8);
    }
}
