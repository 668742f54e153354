use crate::registry::LockEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    NotFound,
    NotAFile,
    Unreadable(String),
}

impl std::fmt::Display for MissingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingReason::NotFound => write!(f, "not found"),
            MissingReason::NotAFile => write!(f, "not a regular file"),
            MissingReason::Unreadable(err) => write!(f, "unreadable: {}", err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockStatus {
    Ok,
    Mismatch { actual: String },
    Missing { reason: MissingReason },
}

impl LockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockStatus::Ok => "ok",
            LockStatus::Mismatch { .. } => "mismatch",
            LockStatus::Missing { .. } => "missing",
        }
    }

    pub fn is_violation(&self) -> bool {
        !matches!(self, LockStatus::Ok)
    }
}

impl std::fmt::Display for LockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub domain: String,
    pub entry: LockEntry,
    pub status: LockStatus,
}

impl VerificationResult {
    pub fn actual_digest(&self) -> Option<&str> {
        match &self.status {
            LockStatus::Mismatch { actual } => Some(actual),
            _ => None,
        }
    }
}
