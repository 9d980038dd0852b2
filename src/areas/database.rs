//! Commit record storage
//!
//! One JSON record per commit, keyed by id under `commits/<id>.json`.
//! Commits are immutable once written: storing an id that already exists is
//! a no-op, and no operation ever rewrites a commit record.

use crate::areas::store::RecordStore;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use std::path::PathBuf;
use walkdir::WalkDir;

const COMMITS_DIR: &str = "commits";

#[derive(Debug, new)]
pub struct Database {
    store: RecordStore,
}

impl Database {
    pub fn commits_path(&self) -> PathBuf {
        self.store.root().join(COMMITS_DIR)
    }

    fn record_key(commit_id: &CommitId) -> String {
        format!("{COMMITS_DIR}/{commit_id}.json")
    }

    /// Persist a commit record unless one with the same id already exists
    pub fn store_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        let key = Self::record_key(commit.id());

        if self.store.exists(&key) {
            return Ok(());
        }

        self.store.save(&key, commit)
    }

    /// Load a commit record; missing or unparsable records yield None
    pub fn load_commit(&self, commit_id: &CommitId) -> Option<Commit> {
        self.store.load_optional(&Self::record_key(commit_id))
    }

    /// Enumerate every commit record, in no particular order
    pub fn list_commits(&self) -> anyhow::Result<Vec<Commit>> {
        let commits_path = self.commits_path();

        if !commits_path.exists() {
            return Ok(Vec::new());
        }

        Ok(WalkDir::new(&commits_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
            .filter_map(|entry| {
                let bytes = std::fs::read(entry.path()).ok()?;
                serde_json::from_slice::<Commit>(&bytes).ok()
            })
            .collect::<Vec<_>>())
    }
}
