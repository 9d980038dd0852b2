//! Commit objects and identifiers

pub mod commit;
pub mod commit_id;

use sha1::{Digest, Sha1};

/// Hex-encoded SHA-1 of a file's content, used to detect divergence between
/// two snapshots of the same path
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());

    let digest = hasher.finalize();
    format!("{digest:x}")
}
