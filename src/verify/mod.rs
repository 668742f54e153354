mod status;
mod verifier;
mod outcome;
mod report;

pub use status::{LockStatus, MissingReason, VerificationResult};
pub use verifier::LockVerifier;
pub use outcome::{RunOutcome, EXIT_OK, EXIT_ERROR, EXIT_VIOLATION};
pub use report::{
    entry_lines, summary_line, render_text, ReportOptions, ReportRow, ReportDocument, EntryTableRow,
};
