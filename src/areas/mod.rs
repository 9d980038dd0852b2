//! Core repository components
//!
//! This module contains the fundamental building blocks of a jot repository:
//!
//! - `store`: persistent JSON record store rooted at the control directory
//! - `staging`: staging area for files awaiting the next commit
//! - `database`: commit record storage
//! - `refs`: branch reference table and HEAD configuration
//! - `repository`: high-level repository operations and coordination
//! - `workspace`: working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod staging;
pub mod store;
pub mod workspace;
