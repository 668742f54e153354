use super::status::{LockStatus, VerificationResult};

pub const EXIT_OK: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
/// Reserved for integrity violations so callers can tell them from generic failures.
pub const EXIT_VIOLATION: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    results: Vec<VerificationResult>,
    all_passed: bool,
}

impl RunOutcome {
    pub fn new(results: Vec<VerificationResult>) -> Self {
        let all_passed = results.iter().all(|r| r.status == LockStatus::Ok);
        Self { results, all_passed }
    }

    pub fn results(&self) -> &[VerificationResult] {
        &self.results
    }

    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    pub fn violations(&self) -> Vec<&VerificationResult> {
        self.results.iter().filter(|r| r.status.is_violation()).collect()
    }

    pub fn violation_count(&self) -> usize {
        self.results.iter().filter(|r| r.status.is_violation()).count()
    }

    pub fn mismatch_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, LockStatus::Mismatch { .. }))
            .count()
    }

    pub fn missing_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, LockStatus::Missing { .. }))
            .count()
    }

    /// Distinct domains in first-seen order.
    pub fn domains(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = Vec::new();
        for r in &self.results {
            if !domains.contains(&r.domain.as_str()) {
                domains.push(&r.domain);
            }
        }
        domains
    }

    pub fn exit_code(&self) -> u8 {
        if self.all_passed {
            EXIT_OK
        } else {
            EXIT_VIOLATION
        }
    }
}
