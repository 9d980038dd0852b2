use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Initialize the control directory structure
    ///
    /// Idempotent: an already-initialized repository is reported, never
    /// reinitialized or failed on.
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            writeln!(self.writer(), "repository already initialized")?;
            return Ok(());
        }

        fs::create_dir_all(self.control_path())
            .context("failed to create the control directory")?;
        fs::create_dir_all(self.database().commits_path())
            .context("failed to create the commits directory")?;

        self.refs()
            .write_default_config()
            .context("failed to write the initial config record")?;

        writeln!(
            self.writer(),
            "initialized empty repository in {}",
            self.control_path().display()
        )?;

        Ok(())
    }
}
