use std::path::{Path, PathBuf};
use tracing::debug;
use crate::error::{LockError, Result};

/// Environment variable consulted for a root override.
pub const ROOT_ENV: &str = "VERIFY_LOCK_ROOT";

/// Resolve the directory that registry paths are relative to. An explicit
/// override wins; otherwise the root is two levels above the executable.
pub fn resolve_root(root_override: Option<&Path>) -> Result<PathBuf> {
    let root = match root_override {
        Some(path) => path.to_path_buf(),
        None => default_root()?,
    };

    validate_root(&root)
}

pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| LockError::Root(format!("cannot locate executable: {}", e)))?;
    root_from_exe(&exe)
}

pub fn root_from_exe(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| LockError::Root(format!("cannot derive root from {}", exe.display())))
}

fn validate_root(root: &Path) -> Result<PathBuf> {
    let canonical = root
        .canonicalize()
        .map_err(|e| LockError::Root(format!("{}: {}", root.display(), e)))?;

    if !canonical.is_dir() {
        return Err(LockError::Root(format!("{} is not a directory", canonical.display())));
    }

    debug!("Lock root: {}", canonical.display());
    Ok(canonical)
}
