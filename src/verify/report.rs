use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;
use crate::registry::{LockEntry, Registry};
use super::outcome::RunOutcome;
use super::status::{LockStatus, VerificationResult};

const REMEDIATION: &str = "Revert changes or update hashes after re-validation.";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Also print a line for entries that passed.
    pub verbose: bool,
    /// Color the final banner.
    pub color: bool,
}

fn label(result: &VerificationResult, qualify: bool) -> String {
    if qualify {
        format!("{}:{}", result.domain, result.entry.path)
    } else {
        result.entry.path.clone()
    }
}

/// Per-entry report lines in registry order. Passing entries are only listed
/// when `verbose` is set.
pub fn entry_lines(outcome: &RunOutcome, options: ReportOptions) -> Vec<String> {
    let qualify = outcome.domains().len() > 1;
    let mut lines = Vec::new();

    for result in outcome.results() {
        let label = label(result, qualify);
        match &result.status {
            LockStatus::Ok => {
                if options.verbose {
                    lines.push(format!("[LOCK] ok: {}", label));
                }
            }
            LockStatus::Missing { reason } => {
                lines.push(format!("[LOCK] Missing locked file: {} ({})", label, reason));
            }
            LockStatus::Mismatch { actual } => {
                lines.push(format!("[LOCK] Hash mismatch for {}", label));
                lines.push(format!("       expected: {}", result.entry.expected_digest));
                lines.push(format!("       got     : {}", actual));
            }
        }
    }

    lines
}

pub fn summary_line(outcome: &RunOutcome) -> String {
    if outcome.all_passed() {
        "LOCK OK".to_string()
    } else {
        format!(
            "LOCK FAILED: {} violation(s) in protected files. {}",
            outcome.violation_count(),
            REMEDIATION
        )
    }
}

pub fn render_text(outcome: &RunOutcome, options: ReportOptions) -> String {
    let mut out = String::new();
    for line in entry_lines(outcome, options) {
        out.push_str(&line);
        out.push('\n');
    }
    if !outcome.all_passed() {
        out.push('\n');
    }

    let summary = summary_line(outcome);
    if !options.color {
        out.push_str(&summary);
    } else if outcome.all_passed() {
        out.push_str(&summary.green().bold().to_string());
    } else {
        out.push_str(&summary.red().bold().to_string());
    }
    out.push('\n');
    out
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub domain: String,
    pub name: String,
    pub path: String,
    pub expected: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&VerificationResult> for ReportRow {
    fn from(result: &VerificationResult) -> Self {
        let reason = match &result.status {
            LockStatus::Missing { reason } => Some(reason.to_string()),
            _ => None,
        };

        ReportRow {
            domain: result.domain.clone(),
            name: result.entry.name.clone(),
            path: result.entry.path.clone(),
            expected: result.entry.expected_digest.clone(),
            status: result.status.as_str(),
            actual: result.actual_digest().map(str::to_string),
            reason,
        }
    }
}

/// Machine-readable form of a run, for `--output json|yaml`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub checked_at: DateTime<Utc>,
    pub root: String,
    pub all_passed: bool,
    pub violation_count: usize,
    pub results: Vec<ReportRow>,
}

impl ReportDocument {
    pub fn new(outcome: &RunOutcome, root: &Path) -> Self {
        Self {
            checked_at: Utc::now(),
            root: root.display().to_string(),
            all_passed: outcome.all_passed(),
            violation_count: outcome.violation_count(),
            results: outcome.results().iter().map(ReportRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct EntryTableRow {
    #[tabled(rename = "Domain")]
    pub domain: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "SHA-256")]
    pub digest: String,
}

impl EntryTableRow {
    fn from_entry(domain: &str, entry: &LockEntry) -> Self {
        Self {
            domain: domain.to_string(),
            name: entry.name.clone(),
            path: entry.path.clone(),
            digest: entry.expected_digest.to_lowercase(),
        }
    }

    pub fn from_registries(registries: &[Registry]) -> Vec<Self> {
        registries
            .iter()
            .flat_map(|r| r.entries().iter().map(move |e| Self::from_entry(r.domain(), e)))
            .collect()
    }
}
