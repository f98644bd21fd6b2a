//! Local file probe
//!
//! Turns a path on disk into a `FileCandidate`: the file name, its size and
//! a SHA-256 digest of the content. The content is never interpreted.

use crate::domain::entities::FileCandidate;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

const READ_CHUNK: usize = 64 * 1024;

/// Reads name and size of a local file without touching its content
pub fn inspect_file(path: &Path) -> io::Result<FileCandidate> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a file path: {}", path.display()),
            )
        })?;
    let size = fs::metadata(path)?.len();

    Ok(FileCandidate::new(name, size))
}

/// Hex-encoded SHA-256 of a local file's content
pub fn digest_file(path: &Path) -> io::Result<String> {
    sha256_hex(BufReader::new(File::open(path)?))
}

/// Reads name, size and digest of a local file
pub fn probe_file(path: &Path) -> io::Result<FileCandidate> {
    let candidate = inspect_file(path)?;
    let digest = digest_file(path)?;

    tracing::debug!(name = candidate.name(), size = candidate.size(), "probed file");
    Ok(candidate.with_sha256(digest))
}

/// Hex-encoded SHA-256 of everything `reader` yields
pub fn sha256_hex<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; READ_CHUNK];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
