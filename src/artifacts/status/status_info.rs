use std::path::PathBuf;

/// Snapshot of the repository's user-visible state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    /// Name of the currently active branch
    pub head: String,
    /// Paths staged for the next commit
    pub staged: Vec<PathBuf>,
    /// Top-level files not governed by version-control metadata
    pub untracked: Vec<PathBuf>,
}
