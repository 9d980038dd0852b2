use crate::areas::repository::Repository;
use crate::artifacts::core::RepoError;
use crate::artifacts::objects::commit_id::CommitId;
use std::io::Write;

impl Repository {
    /// Move HEAD to another branch and restore its snapshot
    ///
    /// Two ordered steps that are not atomic with respect to a crash:
    /// HEAD is updated first, then the files are restored. A crash in
    /// between leaves HEAD on a branch whose files were never restored.
    pub fn switch_branch(&mut self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let target_id = self
            .refs()
            .read_ref(name)
            .ok_or_else(|| RepoError::BranchNotFound(name.to_string()))?;

        self.refs().set_head(name)?;
        self.restore_snapshot(&target_id)?;

        writeln!(self.writer(), "switched to branch '{}'", name)?;

        Ok(())
    }

    /// Overwrite the working directory with a commit's snapshot
    ///
    /// Files on disk that are absent from the commit are left untouched. A
    /// missing commit record is reported and leaves the working directory
    /// as it was.
    pub(crate) fn restore_snapshot(&self, commit_id: &CommitId) -> anyhow::Result<()> {
        match self.database().load_commit(commit_id) {
            Some(commit) => {
                writeln!(
                    self.writer(),
                    "restoring files from commit {}",
                    commit_id.to_short()
                )?;
                self.workspace().restore_snapshot(commit.files())
            }
            None => {
                writeln!(
                    self.writer(),
                    "commit {} not found, working directory left untouched",
                    commit_id.to_short()
                )?;
                Ok(())
            }
        }
    }
}
