use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use std::io::Write;

impl Repository {
    /// Create a new branch pointing at the current branch's commit
    ///
    /// Branches start as pure aliases of their origin; no commit is
    /// created. A duplicate name or a repository without any commit yet is
    /// reported and leaves the ref table unchanged.
    pub fn create_branch(&mut self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let name = BranchName::try_parse(name.to_string())?;
        let mut refs = self.refs().load();

        if refs.contains_key(name.as_ref()) {
            writeln!(self.writer(), "branch '{}' already exists", name)?;
            return Ok(());
        }

        let origin_branch = self.refs().read_head();
        let Some(origin_id) = refs.get(&origin_branch).cloned() else {
            writeln!(
                self.writer(),
                "cannot create a branch: no commits yet on '{}'",
                origin_branch
            )?;
            return Ok(());
        };

        refs.insert(name.as_ref().to_string(), origin_id.clone());
        self.refs().save(&refs)?;

        writeln!(
            self.writer(),
            "branch '{}' created from {} ({})",
            name,
            origin_branch,
            origin_id.to_short()
        )?;

        Ok(())
    }

    /// List all branches, marking the current one
    pub fn list_branches(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let refs = self.refs().load();
        let head = self.refs().read_head();

        for (branch, commit_id) in &refs {
            let marker = if *branch == head { "*" } else { " " };
            writeln!(self.writer(), " {} {} ({})", marker, branch, commit_id.to_short())?;
        }

        // the head branch exists before its first commit gives it an entry
        if !refs.contains_key(&head) {
            writeln!(self.writer(), " * {} (no commits yet)", head)?;
        }

        Ok(())
    }
}
