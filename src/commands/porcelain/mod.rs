//! User-facing version control operations
//!
//! ## Commands
//!
//! - `init`: initialize a new repository
//! - `add`: stage files for the next commit
//! - `commit`: snapshot the staging area into a commit
//! - `status`: show staged, untracked, and branch state
//! - `branch`: create or list branches
//! - `switch`: move HEAD to another branch and restore its files
//! - `merge`: merge a branch into the current one with conflict resolution
//! - `log`: show commit history
//! - `graph`: show commits with their branch pointers

pub mod add;
pub mod branch;
pub mod commit;
pub mod graph;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
pub mod switch;
