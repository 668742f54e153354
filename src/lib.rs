pub mod error;
pub mod digest;
pub mod registry;
pub mod config;
pub mod verify;

pub use error::{LockError, Result};
pub use digest::{sha256_bytes, sha256_file, sha256_reader, digests_match, CHUNK_SIZE, DIGEST_HEX_LEN};
pub use registry::{select_registries, LockEntry, Registry, RegistryLoader, RegistryValidator, ValidationResult};
pub use config::{resolve_root, ROOT_ENV};
pub use verify::{
    LockVerifier, LockStatus, MissingReason, VerificationResult, RunOutcome,
    ReportOptions, ReportDocument, EntryTableRow, render_text,
    EXIT_OK, EXIT_ERROR, EXIT_VIOLATION,
};
