//! Local report writer implementation
//!
//! Saves exported reports into a directory on the local filesystem.

use crate::domain::entities::ExportDocument;
use crate::domain::repositories::{ReportWriter, ReportWriterError, WriteOptions, WriteResult};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Local file system writer
pub struct LocalReportWriter {
    output_dir: PathBuf,
    reports_written: AtomicUsize,
}

impl LocalReportWriter {
    /// Creates a writer, creating the output directory if needed
    pub fn new(output_dir: &Path) -> Result<Self, ReportWriterError> {
        if !output_dir.exists() {
            fs::create_dir_all(output_dir).map_err(|e| open_error(e, output_dir))?;
        }

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            reports_written: AtomicUsize::new(0),
        })
    }

    fn output_path(&self, document: &ExportDocument) -> PathBuf {
        // Only the final component is used so a crafted name cannot escape
        // the output directory.
        let name = Path::new(&document.file_name)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "report.txt".into());
        self.output_dir.join(name)
    }
}

fn open_error(e: std::io::Error, path: &Path) -> ReportWriterError {
    match e.kind() {
        ErrorKind::PermissionDenied => ReportWriterError::PermissionDenied(path.display().to_string()),
        ErrorKind::AlreadyExists => ReportWriterError::FileExists(path.display().to_string()),
        _ => ReportWriterError::IoError(e),
    }
}

impl ReportWriter for LocalReportWriter {
    fn write(
        &self,
        document: &ExportDocument,
        options: &WriteOptions,
    ) -> Result<WriteResult, ReportWriterError> {
        let output_path = self.output_path(document);

        let mut open = OpenOptions::new();
        open.write(true);
        if options.overwrite {
            open.create(true).truncate(true);
        } else {
            open.create_new(true);
        }

        let mut file = open
            .open(&output_path)
            .map_err(|e| open_error(e, &output_path))?;
        file.write_all(document.contents.as_bytes())?;
        file.sync_all()?;

        self.reports_written.fetch_add(1, Ordering::Relaxed);
        tracing::info!(path = %output_path.display(), "report saved");

        Ok(WriteResult {
            saved_path: output_path,
            saved_size: document.contents.len() as u64,
        })
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn reports_written(&self) -> usize {
        self.reports_written.load(Ordering::Relaxed)
    }
}
