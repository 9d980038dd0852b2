use crate::areas::repository::Repository;
use crate::artifacts::core::RepoError;
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::resolver::ConflictResolver;
use crate::artifacts::merge::snapshot_union::SnapshotUnion;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Merge a source branch into the current branch
    ///
    /// State machine over a single invocation:
    ///
    /// 1. resolve both branch pointers; an unknown source branch fails
    /// 2. identical pointers terminate as already up to date
    /// 3. union the two commits' file maps, routing divergent paths
    ///    through the resolver
    /// 4. write every merged path to the working directory (full overwrite,
    ///    same semantics as checkout; this loop is the only
    ///    partial-mutation window if interrupted)
    /// 5. without conflicts, fast-forward the current branch's pointer to
    ///    the source commit; with conflicts, leave the pointer unchanged
    ///    and expect the caller to stage and commit the resolution
    pub fn merge(
        &mut self,
        source_branch: &str,
        resolver: &mut dyn ConflictResolver,
    ) -> anyhow::Result<MergeOutcome> {
        self.ensure_initialized()?;

        let mut refs = self.refs().load();
        let source_id = refs
            .get(source_branch)
            .cloned()
            .ok_or_else(|| RepoError::BranchNotFound(source_branch.to_string()))?;

        let current_branch = self.refs().read_head();
        let current_id = refs.get(&current_branch).cloned();

        if current_id.as_ref() == Some(&source_id) {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        writeln!(
            self.writer(),
            "merging '{}' into '{}'",
            source_branch,
            current_branch
        )?;

        // missing commit records degrade to empty file maps
        let source_files = self
            .database()
            .load_commit(&source_id)
            .map(|commit| commit.into_files())
            .unwrap_or_default();
        let current_files = current_id
            .and_then(|id| self.database().load_commit(&id))
            .map(|commit| commit.into_files())
            .unwrap_or_default();

        let merged = SnapshotUnion::new(&current_files, &source_files).resolve_with(resolver)?;

        for path in &merged.additions {
            writeln!(
                self.writer(),
                "new file added by the merge: {}",
                path.display()
            )?;
        }
        for path in &merged.conflicts {
            writeln!(
                self.writer(),
                "{} {}",
                "conflict resolved:".yellow(),
                path.display()
            )?;
        }

        for (path, snapshot) in &merged.files {
            self.workspace().write_file(path, &snapshot.content)?;
        }

        if merged.conflicts.is_empty() {
            refs.insert(current_branch.clone(), source_id.clone());
            self.refs().save(&refs)?;

            writeln!(
                self.writer(),
                "fast-forwarded '{}' to {}",
                current_branch,
                source_id.to_short()
            )?;

            Ok(MergeOutcome::FastForwarded(source_id))
        } else {
            writeln!(
                self.writer(),
                "resolutions written to the working directory; stage and commit them to finalize the merge"
            )?;

            Ok(MergeOutcome::Conflicted {
                resolved: merged.conflicts,
            })
        }
    }
}
