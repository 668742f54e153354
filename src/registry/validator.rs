use regex::Regex;
use std::collections::HashSet;
use std::path::{Component, Path};
use crate::digest::DIGEST_HEX_LEN;
use super::entry::LockEntry;

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub domain: String,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub code: &'static str,
    pub message: String,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("[{}] {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub struct RegistryValidator {
    digest_pattern: Regex,
}

impl RegistryValidator {
    pub fn new() -> Self {
        Self {
            digest_pattern: Regex::new(&format!("^[0-9a-fA-F]{{{}}}$", DIGEST_HEX_LEN)).unwrap(),
        }
    }

    pub fn validate(&self, domain: &str, entries: &[LockEntry]) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        self.check_digests(entries, &mut errors);
        Self::check_duplicate_names(entries, &mut errors);
        Self::check_paths(entries, &mut errors);
        Self::check_not_empty(entries, &mut warnings);

        ValidationResult {
            domain: domain.to_string(),
            errors,
            warnings,
        }
    }

    fn check_digests(&self, entries: &[LockEntry], errors: &mut Vec<ValidationError>) {
        for entry in entries {
            if !self.digest_pattern.is_match(&entry.expected_digest) {
                errors.push(ValidationError {
                    code: "E001",
                    message: format!(
                        "{}: expected digest '{}' is not a {}-character hex string",
                        entry.name, entry.expected_digest, DIGEST_HEX_LEN
                    ),
                });
            }
        }
    }

    fn check_duplicate_names(entries: &[LockEntry], errors: &mut Vec<ValidationError>) {
        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.name.as_str()) {
                errors.push(ValidationError {
                    code: "E002",
                    message: format!("duplicate entry name: {}", entry.name),
                });
            }
        }
    }

    fn check_paths(entries: &[LockEntry], errors: &mut Vec<ValidationError>) {
        for entry in entries {
            if entry.path.trim().is_empty() {
                errors.push(ValidationError {
                    code: "E003",
                    message: format!("{}: path is empty", entry.name),
                });
                continue;
            }

            let path = Path::new(&entry.path);
            let escapes = path.components().any(|c| {
                matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
            });
            if path.is_absolute() || escapes {
                errors.push(ValidationError {
                    code: "E004",
                    message: format!(
                        "{}: path '{}' must be relative to the lock root",
                        entry.name, entry.path
                    ),
                });
            }
        }
    }

    fn check_not_empty(entries: &[LockEntry], warnings: &mut Vec<ValidationWarning>) {
        if entries.is_empty() {
            warnings.push(ValidationWarning {
                code: "W001",
                message: "registry has no entries; nothing is protected".to_string(),
            });
        }
    }
}

impl Default for RegistryValidator {
    fn default() -> Self {
        Self::new()
    }
}
