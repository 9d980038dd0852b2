//! Command implementations
//!
//! All user-facing operations live here as `impl Repository` blocks, one
//! file per command. Reports are written to the repository's injected
//! writer; the engine itself never prints directly.

pub mod porcelain;
