use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "sha256")]
    pub expected_digest: String,
}

impl LockEntry {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        expected_digest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            expected_digest: expected_digest.into(),
        }
    }

    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

/// Serialized form of a lock manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRegistry {
    pub domain: String,
    #[serde(default)]
    pub entries: Vec<LockEntry>,
}
