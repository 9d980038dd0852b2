use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use chrono::Local;
use std::io::Write;

impl Repository {
    /// Snapshot the staging area into a new commit
    ///
    /// Two-phase protocol: first the immutable commit record is written
    /// (with `parent` set to the current HEAD branch name), then the
    /// current branch's pointer is advanced to it. A commit whose pointer
    /// advance is skipped would be orphaned, so both phases run here.
    ///
    /// Returns None and reports when nothing is staged.
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<Option<CommitId>> {
        self.ensure_initialized()?;

        let staging = self.staging();
        let mut staging = staging.lock().await;

        staging.rehydrate()?;

        if staging.is_empty() {
            writeln!(self.writer(), "nothing to commit (staging area is empty)")?;
            return Ok(None);
        }

        // phase one: persist the immutable commit object
        let head_branch = self.refs().read_head();
        let commit = Commit::new(
            message.trim().to_string(),
            Local::now(),
            staging.take_entries(),
            head_branch,
        );
        self.database().store_commit(&commit)?;

        // the commit consumed the staging set whole; its record disappears
        staging.write_updates()?;

        // phase two: advance the mutable branch pointer
        let commit_id = commit.id().clone();
        let branch = self.refs().advance_current_branch(&commit_id)?;

        writeln!(
            self.writer(),
            "[{} {}] {}",
            branch,
            commit_id.to_short(),
            commit.short_message()
        )?;

        Ok(Some(commit_id))
    }
}
