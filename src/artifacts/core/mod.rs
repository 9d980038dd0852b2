//! Shared error taxonomy
//!
//! Operations report soft failures (nothing staged, duplicate branch) to
//! the repository writer and return `Ok`. Hard failures carry one of these
//! variants inside the `anyhow::Error` so the boundary can match on a
//! distinct failure kind.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("repository not initialized (run 'init' first)")]
    NotInitialized,

    #[error("branch '{0}' does not exist")]
    BranchNotFound(String),

    #[error("commit {0} not found")]
    CommitNotFound(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),
}
