mod entry;
mod validator;
mod loader;
pub mod builtin;

use std::path::Path;
use tracing::warn;
use crate::error::{LockError, Result};

pub use entry::{LockEntry, RawRegistry};
pub use validator::{RegistryValidator, ValidationResult, ValidationError, ValidationWarning};
pub use loader::RegistryLoader;

/// An ordered, validated set of protected files for one lock domain.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Registry {
    domain: String,
    entries: Vec<LockEntry>,
}

impl Registry {
    pub fn new(domain: impl Into<String>, entries: Vec<LockEntry>) -> Result<Self> {
        let domain = domain.into();
        let validation = RegistryValidator::new().validate(&domain, &entries);

        if !validation.is_valid() {
            return Err(LockError::Registry(format!(
                "{}: {}",
                domain,
                validation.error_summary()
            )));
        }

        for w in &validation.warnings {
            warn!("{} [{}]: {}", domain, w.code, w.message);
        }

        Ok(Self { domain, entries })
    }

    pub fn builtin(domain: &str) -> Result<Self> {
        let def = builtin::find(domain).ok_or_else(|| {
            LockError::UnknownDomain(format!(
                "{} (available: {})",
                domain,
                builtin::domain_names().join(", ")
            ))
        })?;

        let entries = def
            .entries
            .iter()
            .map(|(name, path, digest)| LockEntry::new(*name, *path, *digest))
            .collect();

        Self::new(def.name, entries)
    }

    pub fn builtins() -> Result<Vec<Self>> {
        builtin::DOMAINS.iter().map(|d| Self::builtin(d.name)).collect()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn entries(&self) -> &[LockEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

/// Pick the registries for one run: manifests if any were given, the builtin
/// tables otherwise, narrowed to `domains`. Each domain is checked at most once,
/// in first-seen order.
pub fn select_registries<P: AsRef<Path>>(manifests: &[P], domains: &[String]) -> Result<Vec<Registry>> {
    let mut wanted: Vec<&str> = Vec::new();
    for domain in domains {
        if !wanted.contains(&domain.as_str()) {
            wanted.push(domain);
        }
    }

    if manifests.is_empty() {
        if wanted.is_empty() {
            return Registry::builtins();
        }
        return wanted.iter().map(|d| Registry::builtin(d)).collect();
    }

    let mut loaded: Vec<Registry> = Vec::new();
    for registry in RegistryLoader::new().load_files(manifests)? {
        if loaded.iter().any(|r| r.domain() == registry.domain()) {
            warn!("Skipping repeated lock domain '{}'", registry.domain());
            continue;
        }
        loaded.push(registry);
    }

    if wanted.is_empty() {
        return Ok(loaded);
    }

    wanted
        .iter()
        .map(|d| {
            loaded
                .iter()
                .find(|r| r.domain() == *d)
                .cloned()
                .ok_or_else(|| LockError::UnknownDomain(d.to_string()))
        })
        .collect()
}
