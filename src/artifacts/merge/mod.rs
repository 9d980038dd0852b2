//! Merge engine
//!
//! A merge compares the file snapshots of two branches, resolves per-file
//! conflicts through a pluggable [`ConflictResolver`], and finalizes the
//! merged state in the working directory. There is no dedicated merge
//! commit: a conflict-free merge fast-forwards the current branch's pointer
//! to the source commit, and a conflicted merge leaves the pointer
//! untouched until the resolution is staged and committed manually.
//!
//! [`ConflictResolver`]: resolver::ConflictResolver

pub mod resolver;
pub mod snapshot_union;

use crate::artifacts::objects::commit_id::CommitId;
use std::path::PathBuf;

/// Terminal state of a single merge invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Source and current branch already point at the same commit
    AlreadyUpToDate,
    /// No conflicts: the current branch's pointer was advanced to the
    /// source commit id
    FastForwarded(CommitId),
    /// At least one conflict was resolved; the working directory holds the
    /// resolved content but the branch pointer is unchanged
    Conflicted { resolved: Vec<PathBuf> },
}
