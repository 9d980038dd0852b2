//! Working directory file system operations

use crate::artifacts::objects::commit::SnapshotSet;
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Entries never reported as untracked, in addition to hidden files
const IGNORED_ENTRIES: [&str; 4] = [".jot", ".git", "__pycache__", ".DS_Store"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read file {}", file_path.display()))
    }

    /// Overwrite (or create) a file with the given content, creating parent
    /// directories as needed
    pub fn write_file(&self, file_path: &Path, content: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(file_path);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&file_path, content)
            .with_context(|| format!("failed to write file {}", file_path.display()))
    }

    /// Overwrite every file of a snapshot with its stored content, verbatim
    ///
    /// Files present on disk but absent from the snapshot are left
    /// untouched; this is not a clean checkout, so stale files can persist
    /// across restores.
    pub fn restore_snapshot(&self, files: &SnapshotSet) -> anyhow::Result<()> {
        for (file_path, snapshot) in files {
            self.write_file(file_path, &snapshot.content)?;
        }

        Ok(())
    }

    /// Top-level regular files not governed by version-control metadata
    ///
    /// Hidden entries and the denylist are excluded; directories are not
    /// descended into.
    pub fn list_untracked(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut untracked = WalkDir::new(self.path.as_ref())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| !Self::is_ignored(entry.path()))
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();

        untracked.sort();

        Ok(untracked)
    }

    fn is_ignored(path: &Path) -> bool {
        match path.file_name() {
            Some(name) => {
                let name = name.to_string_lossy();
                name.starts_with('.') || IGNORED_ENTRIES.contains(&name.as_ref())
            }
            None => true,
        }
    }
}
