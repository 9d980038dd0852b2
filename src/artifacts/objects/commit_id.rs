//! Commit identifier
//!
//! Commit identity is a SHA-1 over the commit message and its wall-clock
//! timestamp, NOT over the snapshot content. Identical content committed
//! twice yields different ids, and two commits are only ever told apart by
//! id. This is a preserved simplification: the rest of the model (notably
//! the branch-denoting `parent` field) depends on it, so it must not be
//! silently upgraded to content addressing.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// Length of a hex-encoded commit id
pub const COMMIT_ID_LENGTH: usize = 40;

/// 40-character hexadecimal commit identifier
///
/// Deserialization goes through [`CommitId::try_parse`], so a record
/// carrying a malformed id is unparsable as a whole and loads as the
/// record type's default instead of admitting an invalid id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId(String);

impl CommitId {
    /// Derive an id from a commit message and timestamp
    ///
    /// Collision-prone under identical message and timestamp; acceptable
    /// only because timestamps carry sub-second resolution in practice.
    pub fn generate(message: &str, date: &DateTime<Local>) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(message.as_bytes());
        hasher.update(date.to_rfc3339().as_bytes());

        let digest = hasher.finalize();
        Self(format!("{digest:x}"))
    }

    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            anyhow::bail!("invalid commit id length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("invalid commit id characters: {}", id);
        }

        Ok(Self(id))
    }

    /// Abbreviated 7-character form used in reports
    pub fn to_short(&self) -> &str {
        &self.0[..7]
    }
}

impl TryFrom<String> for CommitId {
    type Error = anyhow::Error;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::try_parse(id)
    }
}

impl From<CommitId> for String {
    fn from(id: CommitId) -> Self {
        id.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
