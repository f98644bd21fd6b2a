//! Report writer trait
//!
//! Defines the interface for saving exported reports.

use crate::domain::entities::ExportDocument;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when saving an exported report
#[derive(Error, Debug)]
pub enum ReportWriterError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("File already exists: {0}")]
    FileExists(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Options for saving reports
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Whether to overwrite an existing report with the same name
    pub overwrite: bool,
}

/// Result of saving a single report
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// Path where the report was saved
    pub saved_path: PathBuf,
    /// Size in bytes of the saved report
    pub saved_size: u64,
}

/// Trait for saving exported reports
///
/// # Example
///
/// ```ignore
/// let writer = LocalReportWriter::new(Path::new("./reports"))?;
/// let result = writer.write(&document, &WriteOptions::default())?;
/// println!("Saved to: {}", result.saved_path.display());
/// ```
pub trait ReportWriter: Send + Sync {
    /// Saves one exported report
    fn write(
        &self,
        document: &ExportDocument,
        options: &WriteOptions,
    ) -> Result<WriteResult, ReportWriterError>;

    /// Saves several reports, one result per document
    fn write_batch(
        &self,
        documents: &[ExportDocument],
        options: &WriteOptions,
    ) -> Vec<Result<WriteResult, ReportWriterError>> {
        documents.iter().map(|d| self.write(d, options)).collect()
    }

    /// Returns the output directory
    fn output_dir(&self) -> &Path;

    /// Returns the number of reports written so far
    fn reports_written(&self) -> usize;
}
