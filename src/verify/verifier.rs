use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::digest::{digests_match, sha256_file};
use crate::registry::{LockEntry, Registry};
use super::outcome::RunOutcome;
use super::status::{LockStatus, MissingReason, VerificationResult};

pub struct LockVerifier {
    root: PathBuf,
}

impl LockVerifier {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn verify(&self, registry: &Registry) -> RunOutcome {
        RunOutcome::new(self.check_registry(registry))
    }

    pub fn verify_all(&self, registries: &[Registry]) -> RunOutcome {
        let results = registries
            .iter()
            .flat_map(|r| self.check_registry(r))
            .collect();
        RunOutcome::new(results)
    }

    fn check_registry(&self, registry: &Registry) -> Vec<VerificationResult> {
        info!("Verifying {} locked files in '{}'", registry.len(), registry.domain());

        registry
            .entries()
            .iter()
            .map(|entry| self.verify_entry(registry.domain(), entry))
            .collect()
    }

    /// Check one entry. Never fails: every I/O problem becomes a result state.
    pub fn verify_entry(&self, domain: &str, entry: &LockEntry) -> VerificationResult {
        let path = entry.resolve(&self.root);
        let status = Self::check_file(&path, &entry.expected_digest);

        match &status {
            LockStatus::Ok => debug!("{}: {} ok", domain, entry.path),
            LockStatus::Mismatch { actual } => {
                warn!("{}: {} digest mismatch (got {})", domain, entry.path, actual)
            }
            LockStatus::Missing { reason } => {
                warn!("{}: {} missing ({})", domain, entry.path, reason)
            }
        }

        VerificationResult {
            domain: domain.to_string(),
            entry: entry.clone(),
            status,
        }
    }

    fn check_file(path: &Path, expected: &str) -> LockStatus {
        match fs::metadata(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return LockStatus::Missing { reason: MissingReason::NotFound };
            }
            Err(e) => {
                return LockStatus::Missing { reason: MissingReason::Unreadable(e.to_string()) };
            }
            Ok(meta) if !meta.is_file() => {
                return LockStatus::Missing { reason: MissingReason::NotAFile };
            }
            Ok(_) => {}
        }

        Self::classify(expected, sha256_file(path))
    }

    /// A file that exists but cannot be read through is Missing, never Mismatch.
    fn classify(expected: &str, digest: io::Result<String>) -> LockStatus {
        match digest {
            Ok(actual) if digests_match(expected, &actual) => LockStatus::Ok,
            Ok(actual) => LockStatus::Mismatch { actual },
            Err(e) => LockStatus::Missing { reason: MissingReason::Unreadable(e.to_string()) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::sha256_bytes;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content.as_bytes()).unwrap();
        }
        dir
    }

    #[test]
    fn test_verify_entry_ok() {
        let dir = setup(&[("dsp/a.h", "alpha")]);
        let entry = LockEntry::new("a", "dsp/a.h", sha256_bytes(b"alpha"));
        let result = LockVerifier::new(dir.path()).verify_entry("test", &entry);
        assert_eq!(result.status, LockStatus::Ok);
    }

    #[test]
    fn test_verify_entry_uppercase_expected_is_ok() {
        let dir = setup(&[("a.h", "alpha")]);
        let entry = LockEntry::new("a", "a.h", sha256_bytes(b"alpha").to_uppercase());
        let result = LockVerifier::new(dir.path()).verify_entry("test", &entry);
        assert_eq!(result.status, LockStatus::Ok);
    }

    #[test]
    fn test_verify_entry_mismatch_carries_actual() {
        let dir = setup(&[("a.h", "alpha!")]);
        let entry = LockEntry::new("a", "a.h", sha256_bytes(b"alpha"));
        let result = LockVerifier::new(dir.path()).verify_entry("test", &entry);
        assert_eq!(result.actual_digest(), Some(sha256_bytes(b"alpha!").as_str()));
    }

    #[test]
    fn test_verify_entry_missing() {
        let dir = setup(&[]);
        let entry = LockEntry::new("a", "a.h", sha256_bytes(b"alpha"));
        let result = LockVerifier::new(dir.path()).verify_entry("test", &entry);
        assert_eq!(result.status, LockStatus::Missing { reason: MissingReason::NotFound });
    }

    #[test]
    fn test_verify_entry_directory_is_missing() {
        let dir = setup(&[("dsp/a.h", "alpha")]);
        let entry = LockEntry::new("dsp", "dsp", sha256_bytes(b"alpha"));
        let result = LockVerifier::new(dir.path()).verify_entry("test", &entry);
        assert_eq!(result.status, LockStatus::Missing { reason: MissingReason::NotAFile });
    }

    #[test]
    fn test_read_failure_is_unreadable_not_mismatch() {
        let failed = Err(io::Error::new(io::ErrorKind::Other, "read interrupted by I/O error"));
        let status = LockVerifier::classify(&sha256_bytes(b"alpha"), failed);
        assert_eq!(
            status,
            LockStatus::Missing {
                reason: MissingReason::Unreadable("read interrupted by I/O error".to_string())
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_is_unreadable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = setup(&[("a.h", "alpha")]);
        let path = dir.path().join("a.h");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores file modes; nothing to observe there
        if fs::File::open(&path).is_ok() {
            return;
        }

        let entry = LockEntry::new("a", "a.h", sha256_bytes(b"alpha"));
        let result = LockVerifier::new(dir.path()).verify_entry("test", &entry);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        assert!(matches!(
            result.status,
            LockStatus::Missing { reason: MissingReason::Unreadable(_) }
        ));
    }

    #[test]
    fn test_verify_all_keeps_registry_order() {
        let dir = setup(&[("b.h", "bravo")]);
        let first = Registry::new("one", vec![
            LockEntry::new("a", "a.h", sha256_bytes(b"alpha")),
            LockEntry::new("b", "b.h", sha256_bytes(b"bravo")),
        ]).unwrap();
        let second = Registry::new("two", vec![
            LockEntry::new("c", "b.h", sha256_bytes(b"charlie")),
        ]).unwrap();

        let outcome = LockVerifier::new(dir.path()).verify_all(&[first, second]);
        let seen: Vec<_> = outcome
            .results()
            .iter()
            .map(|r| (r.domain.as_str(), r.entry.name.as_str(), r.status.as_str()))
            .collect();
        assert_eq!(seen, vec![("one", "a", "missing"), ("one", "b", "ok"), ("two", "c", "mismatch")]);
    }
}
