//! Snapshot union
//!
//! Unions the file maps of two branches into the final merged state:
//!
//! - paths only in the source are one-sided additions, taken as-is
//! - paths on both sides with identical content hashes need no action
//! - paths on both sides with differing hashes are conflicts; the resolver
//!   chooses exactly one content and the snapshot's hash is recomputed
//!
//! The union never touches disk; the caller applies the resulting state to
//! the working directory and decides whether to fast-forward.

use crate::artifacts::merge::resolver::ConflictResolver;
use crate::artifacts::objects::commit::{FileSnapshot, SnapshotSet};
use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, new)]
pub struct SnapshotUnion<'a> {
    current: &'a SnapshotSet,
    source: &'a SnapshotSet,
}

/// Result of unioning two branch snapshots
#[derive(Debug)]
pub struct MergedState {
    /// Final file state, seeded from the current branch's map
    pub files: SnapshotSet,
    /// Paths that diverged and went through the resolver, in order
    pub conflicts: Vec<PathBuf>,
    /// Paths added one-sidedly by the source branch
    pub additions: Vec<PathBuf>,
}

impl SnapshotUnion<'_> {
    /// Walk the source branch's file map, resolving divergent paths
    ///
    /// The resolver is a synchronous, blocking interaction point: the merge
    /// cannot proceed past a detected conflict until a choice is returned,
    /// and a resolver error aborts the whole merge.
    pub fn resolve_with(&self, resolver: &mut dyn ConflictResolver) -> anyhow::Result<MergedState> {
        let mut files = self.current.clone();
        let mut conflicts = Vec::new();
        let mut additions = Vec::new();

        for (path, remote) in self.source {
            match self.current.get(path) {
                None => {
                    files.insert(path.clone(), remote.clone());
                    additions.push(path.clone());
                }
                Some(local) if local.content_hash == remote.content_hash => {}
                Some(local) => {
                    let chosen = resolver.resolve(path, local, remote)?;
                    files.insert(path.clone(), FileSnapshot::resolved(chosen));
                    conflicts.push(path.clone());
                }
            }
        }

        Ok(MergedState {
            files,
            conflicts,
            additions,
        })
    }
}
