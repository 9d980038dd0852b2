use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::FileSnapshot;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Stage files for the next commit
    ///
    /// Each path present on disk is read in full and inserted into the
    /// staging area, overwriting any previous entry for that path. Paths
    /// absent on disk are reported and skipped, never raised as errors.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let staging = self.staging();
        let mut staging = staging.lock().await;

        staging.rehydrate()?;

        let mut staged_count = 0usize;
        for path in paths {
            let path = PathBuf::from(path);

            if self.workspace().file_exists(&path) {
                let content = self.workspace().read_file(&path)?;
                staging.add(path, FileSnapshot::staged(content));
                staged_count += 1;
            } else {
                writeln!(self.writer(), "file not found: {}", path.display())?;
            }
        }

        staging.write_updates()?;

        writeln!(self.writer(), "{} file(s) staged", staged_count)?;

        Ok(())
    }
}
