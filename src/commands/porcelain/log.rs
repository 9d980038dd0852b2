use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Show all commits, newest first
    pub fn log(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut commits = self.database().list_commits()?;
        commits.sort_by(|a, b| b.date().cmp(a.date()));

        if commits.is_empty() {
            writeln!(self.writer(), "no history yet")?;
            return Ok(());
        }

        for commit in &commits {
            writeln!(
                self.writer(),
                "{} - {} : {}",
                commit.id().to_short().yellow(),
                commit.date().format("%Y-%m-%d %H:%M:%S"),
                commit.message()
            )?;
        }

        Ok(())
    }
}
