use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusInfo;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Show the current branch, staged paths, and untracked files
    pub async fn status(&mut self) -> anyhow::Result<StatusInfo> {
        self.ensure_initialized()?;

        let staging = self.staging();
        let mut staging = staging.lock().await;

        staging.rehydrate()?;

        let info = StatusInfo {
            head: self.refs().read_head(),
            staged: staging.paths().map(Into::into).collect(),
            untracked: self.workspace().list_untracked()?,
        };

        writeln!(self.writer(), "On branch {}", info.head.magenta())?;

        if info.staged.is_empty() {
            writeln!(self.writer(), "\n{}", "staging area is empty".yellow())?;
        } else {
            writeln!(
                self.writer(),
                "\n{}",
                "staged files (ready to commit):".green()
            )?;
            for path in &info.staged {
                writeln!(self.writer(), "  + {}", path.display())?;
            }
        }

        if !info.untracked.is_empty() {
            writeln!(self.writer(), "\n{}", "untracked files:".red())?;
            for path in &info.untracked {
                writeln!(self.writer(), "  ? {}", path.display())?;
            }
        }

        Ok(info)
    }
}
