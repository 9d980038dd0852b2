//! Commit and file snapshot records
//!
//! A commit is a full-content snapshot of every staged file at commit time,
//! not a delta. Commits are immutable once written and are persisted one
//! record per id under `commits/<id>.json`.
//!
//! ## On-disk format
//!
//! ```json
//! {
//!   "id": "<40-hex>",
//!   "message": "...",
//!   "date": "<rfc3339>",
//!   "files": { "<path>": { "content": "...", "hash": "<40-hex>", "added_at": "..." } },
//!   "parent": "<branch name>"
//! }
//! ```

use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::content_hash;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Full-content snapshot of the staging area, keyed by relative path
pub type SnapshotSet = BTreeMap<PathBuf, FileSnapshot>;

/// Snapshot of a single file's content
///
/// The same entity at two lifecycle stages: staged entries carry the time
/// they were added, entries produced by conflict resolution do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSnapshot {
    pub content: String,
    #[serde(rename = "hash")]
    pub content_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Local>>,
}

impl FileSnapshot {
    /// Snapshot taken by the stage operation, stamped with the current time
    pub fn staged(content: String) -> Self {
        let content_hash = content_hash(&content);

        FileSnapshot {
            content,
            content_hash,
            added_at: Some(Local::now()),
        }
    }

    /// Snapshot produced by conflict resolution, with its hash recomputed
    /// from the chosen content
    pub fn resolved(content: String) -> Self {
        let content_hash = content_hash(&content);

        FileSnapshot {
            content,
            content_hash,
            added_at: None,
        }
    }
}

/// Immutable commit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    id: CommitId,
    message: String,
    date: DateTime<Local>,
    files: SnapshotSet,
    /// Name of the branch that was HEAD at commit time. Branch-denoting,
    /// not graph-denoting: this is NOT a parent commit id.
    parent: String,
}

impl Commit {
    pub fn new(message: String, date: DateTime<Local>, files: SnapshotSet, parent: String) -> Self {
        let id = CommitId::generate(&message, &date);

        Commit {
            id,
            message,
            date,
            files,
            parent,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn date(&self) -> &DateTime<Local> {
        &self.date
    }

    pub fn files(&self) -> &SnapshotSet {
        &self.files
    }

    pub fn into_files(self) -> SnapshotSet {
        self.files
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }
}
