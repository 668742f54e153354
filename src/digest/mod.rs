use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read size used when streaming file content into the hasher.
pub const CHUNK_SIZE: usize = 8192;

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

pub fn sha256_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Hash everything `reader` yields, one bounded chunk at a time.
pub fn sha256_reader(mut reader: impl Read) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Lowercase hex SHA-256 of a file's full content. The handle is dropped
/// before returning on every path.
pub fn sha256_file(path: impl AsRef<Path>) -> io::Result<String> {
    let file = File::open(path.as_ref())?;
    sha256_reader(file)
}

pub fn digests_match(expected: &str, actual: &str) -> bool {
    expected.eq_ignore_ascii_case(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HELLO_WORLD: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_sha256_bytes_known_value() {
        assert_eq!(sha256_bytes(b"hello world"), HELLO_WORLD);
        assert_eq!(sha256_bytes(b""), EMPTY);
    }

    #[test]
    fn test_sha256_file_matches_bytes() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "hello world").unwrap();
        tmp.flush().unwrap();

        assert_eq!(sha256_file(tmp.path()).unwrap(), HELLO_WORLD);
    }

    #[test]
    fn test_sha256_empty_file() {
        let tmp = NamedTempFile::new().unwrap();
        assert_eq!(sha256_file(tmp.path()).unwrap(), EMPTY);
    }

    #[test]
    fn test_sha256_spans_multiple_chunks() {
        let content: Vec<u8> = (0..CHUNK_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&content).unwrap();
        tmp.flush().unwrap();

        assert_eq!(sha256_file(tmp.path()).unwrap(), sha256_bytes(&content));
    }

    #[test]
    fn test_single_byte_change_changes_digest() {
        let original = b"static const float table[] = { 0.5f, 0.25f };".to_vec();
        let mut mutated = original.clone();
        mutated[10] ^= 0x01;

        assert_ne!(sha256_bytes(&original), sha256_bytes(&mutated));
    }

    #[test]
    fn test_output_is_lowercase_hex_of_fixed_length() {
        let digest = sha256_bytes(b"anything");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    struct FailAfter {
        remaining: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "device went away"));
            }
            let n = self.remaining.min(buf.len());
            buf[..n].fill(0xAB);
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_read_error_mid_stream_is_reported() {
        let err = sha256_reader(FailAfter { remaining: CHUNK_SIZE + 5 }).unwrap_err();
        assert_eq!(err.to_string(), "device went away");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = sha256_file(dir.path().join("nope.h")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_digests_match_ignores_case() {
        assert!(digests_match(&HELLO_WORLD.to_uppercase(), HELLO_WORLD));
        assert!(!digests_match(EMPTY, HELLO_WORLD));
    }
}
