//! Uploaded file entity
//!
//! The only real facts about an analysis session: name, size and when the
//! file was received.

use chrono::{DateTime, Local};
use serde::Serialize;

/// A file offered to the intake, before validation
///
/// Mirrors what a drop zone or file picker hands over: a name and a size.
/// Hosts that can read the content may attach a SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    name: String,
    size: u64,
    sha256: Option<String>,
}

impl FileCandidate {
    /// Creates a candidate from a name and byte size
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            sha256: None,
        }
    }

    /// Attaches a hex-encoded SHA-256 content digest
    pub fn with_sha256(mut self, digest: impl Into<String>) -> Self {
        self.sha256 = Some(digest.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sha256(&self) -> Option<&str> {
        self.sha256.as_deref()
    }
}

/// An accepted file, owned by exactly one analysis session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    name: String,
    size_bytes: u64,
    received_at: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha256: Option<String>,
}

impl UploadedFile {
    /// Snapshots a candidate at the moment it was accepted
    pub fn accept(candidate: FileCandidate, received_at: DateTime<Local>) -> Self {
        Self {
            name: candidate.name,
            size_bytes: candidate.size,
            received_at,
            sha256: candidate.sha256,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn received_at(&self) -> DateTime<Local> {
        self.received_at
    }

    pub fn sha256(&self) -> Option<&str> {
        self.sha256.as_deref()
    }

    /// File name without its extension, used to name the JSON export
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(0) | None => &self.name,
            Some(dot) => &self.name[..dot],
        }
    }
}
