//! Domain types and algorithms
//!
//! - `branch`: branch name validation
//! - `core`: shared error taxonomy
//! - `merge`: snapshot union and conflict resolution
//! - `objects`: commits, file snapshots, and commit identifiers
//! - `status`: working tree status data

pub mod branch;
pub mod core;
pub mod merge;
pub mod objects;
pub mod status;
