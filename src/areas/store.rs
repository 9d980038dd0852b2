//! Persistent record store
//!
//! Repository state (staging area, commits, refs, config) is persisted as
//! JSON records inside the control directory. Records are addressed by a
//! path relative to that directory, e.g. `config.json` or
//! `commits/<id>.json`.
//!
//! A missing or unparsable record loads as the type's default value instead
//! of failing. Callers that rely on absence to signal "not initialized"
//! check for the control directory itself, not for individual records.

use anyhow::Context;
use derive_new::new;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// JSON record store rooted at the control directory
#[derive(Debug, Clone, new)]
pub struct RecordStore {
    root: Box<Path>,
}

impl RecordStore {
    /// Path to the control directory this store is rooted at
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.record_path(key).exists()
    }

    /// Load a record, falling back to the type's default when the record is
    /// missing or unparsable
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load_optional(key).unwrap_or_default()
    }

    /// Load a record, returning None when it is missing or unparsable
    pub fn load_optional<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = std::fs::read(self.record_path(key)).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Write a record, creating parent directories as needed
    pub fn save<T: Serialize>(&self, key: &str, record: &T) -> anyhow::Result<()> {
        let path = self.record_path(key);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create record directory {}", parent.display())
            })?;
        }

        let content = serde_json::to_vec_pretty(record)?;
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write record {}", path.display()))
    }

    pub fn remove(&self, key: &str) -> anyhow::Result<()> {
        let path = self.record_path(key);

        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove record {}", path.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn missing_record_loads_as_default() {
        let dir = assert_fs::TempDir::new().expect("failed to create temp dir");
        let store = RecordStore::new(dir.path().to_path_buf().into_boxed_path());

        let record: Sample = store.load("absent.json");

        assert_eq!(record, Sample::default());
    }

    #[test]
    fn unparsable_record_loads_as_default() {
        let dir = assert_fs::TempDir::new().expect("failed to create temp dir");
        std::fs::write(dir.path().join("broken.json"), "{not json").expect("failed to write");
        let store = RecordStore::new(dir.path().to_path_buf().into_boxed_path());

        let record: BTreeMap<String, String> = store.load("broken.json");

        assert!(record.is_empty());
    }

    #[test]
    fn save_creates_parent_directories_and_roundtrips() {
        let dir = assert_fs::TempDir::new().expect("failed to create temp dir");
        let store = RecordStore::new(dir.path().to_path_buf().into_boxed_path());
        let record = Sample {
            name: "snapshot".to_string(),
            count: 3,
        };

        store
            .save("nested/record.json", &record)
            .expect("failed to save record");

        assert_eq!(store.load_optional::<Sample>("nested/record.json"), Some(record));
    }

    #[test]
    fn remove_is_a_noop_for_missing_records() {
        let dir = assert_fs::TempDir::new().expect("failed to create temp dir");
        let store = RecordStore::new(dir.path().to_path_buf().into_boxed_path());

        assert!(store.remove("absent.json").is_ok());
    }
}
