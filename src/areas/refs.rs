//! Branch references and HEAD configuration
//!
//! Branches are entries in a single `refs.json` record mapping branch names
//! to commit ids. Every value must name an existing commit record, except
//! the zero-commit window where the configured head branch has no entry yet.
//!
//! The currently active branch (HEAD) lives in `config.json`. There is
//! exactly one HEAD at any time; it always names a branch, which need not
//! exist in the ref table yet.

use crate::areas::store::RecordStore;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_BRANCH: &str = "main";

const CONFIG_RECORD: &str = "config.json";
const REFS_RECORD: &str = "refs.json";

/// Branch name to commit id mapping
pub type RefTable = BTreeMap<String, CommitId>;

/// Repository configuration record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    pub head: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        RepoConfig {
            head: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Branch reference table manager
#[derive(Debug, new)]
pub struct Refs {
    store: RecordStore,
}

impl Refs {
    /// Name of the currently active branch, defaulting to `main`
    pub fn read_head(&self) -> String {
        self.store.load::<RepoConfig>(CONFIG_RECORD).head
    }

    /// Point HEAD at another branch; mutated only by branch switches
    pub fn set_head(&self, branch: &str) -> anyhow::Result<()> {
        let mut config: RepoConfig = self.store.load(CONFIG_RECORD);
        config.head = branch.to_string();

        self.store.save(CONFIG_RECORD, &config)
    }

    pub fn write_default_config(&self) -> anyhow::Result<()> {
        self.store.save(CONFIG_RECORD, &RepoConfig::default())
    }

    pub fn load(&self) -> RefTable {
        self.store.load(REFS_RECORD)
    }

    pub fn save(&self, refs: &RefTable) -> anyhow::Result<()> {
        self.store.save(REFS_RECORD, refs)
    }

    pub fn read_ref(&self, branch: &str) -> Option<CommitId> {
        self.load().get(branch).cloned()
    }

    /// Advance the active branch to a freshly written commit
    ///
    /// Second phase of the commit protocol; skipping it leaves the commit
    /// orphaned. Returns the branch name that was advanced.
    pub fn advance_current_branch(&self, commit_id: &CommitId) -> anyhow::Result<String> {
        let branch = self.read_head();
        let mut refs = self.load();
        refs.insert(branch.clone(), commit_id.clone());
        self.save(&refs)?;

        Ok(branch)
    }

    /// Map each commit id to the branches pointing at it, for graph display
    pub fn reverse_refs(&self) -> BTreeMap<CommitId, Vec<String>> {
        self.load()
            .into_iter()
            .fold(BTreeMap::new(), |mut acc, (branch, commit_id)| {
                acc.entry(commit_id).or_insert_with(Vec::new).push(branch);
                acc
            })
    }
}
