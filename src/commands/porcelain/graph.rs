use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Show every commit with the branches pointing at it
    ///
    /// Each commit's `parent` field holds the branch it was made on, not an
    /// ancestry edge, so the arrow points at a branch name.
    pub fn graph(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut commits = self.database().list_commits()?;
        commits.sort_by(|a, b| a.date().cmp(b.date()));

        if commits.is_empty() {
            writeln!(self.writer(), "the graph is empty")?;
            return Ok(());
        }

        let reverse_refs = self.refs().reverse_refs();
        let head_branch = self.refs().read_head();

        for commit in &commits {
            let decorations = reverse_refs
                .get(commit.id())
                .map(|branches| {
                    let decorated = branches
                        .iter()
                        .map(|branch| {
                            if *branch == head_branch {
                                format!("{} (HEAD)", branch).cyan().to_string()
                            } else {
                                branch.yellow().to_string()
                            }
                        })
                        .collect::<Vec<_>>();

                    format!(" <- {}", decorated.join(", "))
                })
                .unwrap_or_default();

            writeln!(
                self.writer(),
                "[{}] --points-to--> [{}]{}",
                commit.id().to_short(),
                commit.parent(),
                decorations
            )?;
            writeln!(self.writer(), "   └── {}", commit.short_message())?;
        }

        Ok(())
    }
}
