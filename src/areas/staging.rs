//! Staging area
//!
//! The staging area tracks files awaiting the next commit, each as a full
//! content snapshot. It is persisted as a single JSON record mapping
//! relative paths to snapshots; the record is removed from disk entirely
//! once the set is empty, so its absence means "nothing staged".
//!
//! Re-staging a path overwrites the previous entry. A commit consumes the
//! whole set at once; the set is never partially cleared.

use crate::areas::store::RecordStore;
use crate::artifacts::objects::commit::{FileSnapshot, SnapshotSet};
use std::path::{Path, PathBuf};

/// Record key of the staging area inside the control directory
const STAGING_RECORD: &str = "staging.json";

#[derive(Debug)]
pub struct Staging {
    store: RecordStore,
    entries: SnapshotSet,
}

impl Staging {
    pub fn new(store: RecordStore) -> Self {
        Staging {
            store,
            entries: SnapshotSet::new(),
        }
    }

    /// Load the staging record from disk, replacing in-memory entries
    ///
    /// A missing or unparsable record loads as an empty set.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries = self.store.load(STAGING_RECORD);

        Ok(())
    }

    /// Insert or overwrite a staged entry
    pub fn add(&mut self, path: PathBuf, snapshot: FileSnapshot) {
        self.entries.insert(path, snapshot);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    /// Consume the whole staging set, leaving it empty
    pub fn take_entries(&mut self) -> SnapshotSet {
        std::mem::take(&mut self.entries)
    }

    /// Persist the staging set; an empty set removes the record from disk
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if self.entries.is_empty() {
            self.store.remove(STAGING_RECORD)?;
        } else {
            self.store.save(STAGING_RECORD, &self.entries)?;
        }

        Ok(())
    }
}
