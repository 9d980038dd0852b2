//! jot - a minimal snapshot-based version control system
//!
//! Tracks full-content snapshots of a working directory, organizes them into
//! named branches, and merges divergent branches with conflict resolution.
//! All state lives as JSON records inside a `.jot` control directory.
//!
//! The crate is organized into three layers:
//!
//! - `areas`: repository building blocks (record store, staging area,
//!   commit database, refs, workspace)
//! - `artifacts`: domain types and algorithms (commits, branch names,
//!   the merge engine, status info)
//! - `commands`: user-facing operations implemented on [`Repository`]
//!
//! [`Repository`]: areas::repository::Repository

pub mod areas;
pub mod artifacts;
pub mod commands;
