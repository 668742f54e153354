use std::fs;
use std::path::Path;
use tracing::debug;
use crate::error::{LockError, Result};
use super::entry::RawRegistry;
use super::Registry;

pub struct RegistryLoader;

impl RegistryLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Registry> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|_| LockError::RegistryFileNotFound(path.display().to_string()))?;

        debug!("Loading lock manifest {}", path.display());
        self.load_str(&content)
    }

    pub fn load_str(&self, content: &str) -> Result<Registry> {
        let raw: RawRegistry = serde_yaml::from_str(content)?;
        Registry::new(raw.domain, raw.entries)
    }

    pub fn load_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Registry>> {
        paths.iter().map(|p| self.load_file(p)).collect()
    }
}

impl Default for RegistryLoader {
    fn default() -> Self {
        Self::new()
    }
}
