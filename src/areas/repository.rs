use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::staging::Staging;
use crate::areas::store::RecordStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::RepoError;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the reserved control directory inside the working tree
pub const CONTROL_DIR: &str = ".jot";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: Arc<Mutex<Staging>>,
    database: Database,
    refs: Refs,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let store = RecordStore::new(path.join(CONTROL_DIR).into_boxed_path());
        let staging = Staging::new(store.clone());
        let database = Database::new(store.clone());
        let refs = Refs::new(store);
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging: Arc::new(Mutex::new(staging)),
            database,
            refs,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> PathBuf {
        self.path.join(CONTROL_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> Arc<Mutex<Staging>> {
        self.staging.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn is_initialized(&self) -> bool {
        self.control_path().exists()
    }

    /// Every operation except `init` requires an existing control directory;
    /// a repository is never auto-initialized.
    pub(crate) fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepoError::NotInitialized.into())
        }
    }
}
