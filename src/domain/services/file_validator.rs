//! File validator service
//!
//! Accepts or rejects candidate files by their name extension.

use crate::domain::entities::{FileCandidate, UploadedFile};
use crate::domain::repositories::Clock;
use crate::error::{IntakeError, Result};

/// Extension accepted by the intake (compared case-insensitively)
pub const APK_EXTENSION: &str = ".apk";

/// Validates candidate files before an analysis session starts
///
/// Only the name is inspected; the size and content are taken as given.
///
/// # Example
///
/// ```
/// use apklens::domain::entities::FileCandidate;
/// use apklens::domain::services::FileValidator;
///
/// let validator = FileValidator::new();
/// assert!(validator.is_accepted(&FileCandidate::new("Game.APK", 10)));
/// assert!(!validator.is_accepted(&FileCandidate::new("virus.exe", 10)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FileValidator;

impl FileValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when the candidate's name ends in `.apk`, any case
    pub fn is_accepted(&self, candidate: &FileCandidate) -> bool {
        candidate.name().to_lowercase().ends_with(APK_EXTENSION)
    }

    /// Accepts a candidate, stamping it with the current time
    pub fn validate(&self, candidate: FileCandidate, clock: &dyn Clock) -> Result<UploadedFile> {
        if !self.is_accepted(&candidate) {
            tracing::debug!(name = candidate.name(), "rejected non-APK file");
            return Err(IntakeError::InvalidFileType {
                name: candidate.name().to_string(),
            });
        }

        Ok(UploadedFile::accept(candidate, clock.now()))
    }

    /// Validates the first file of a drop or picker selection
    ///
    /// Additional files are ignored; an empty selection is an error.
    pub fn validate_first<I>(&self, files: I, clock: &dyn Clock) -> Result<UploadedFile>
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        match files.into_iter().next() {
            Some(candidate) => self.validate(candidate, clock),
            None => Err(IntakeError::NoFileSelected),
        }
    }
}
