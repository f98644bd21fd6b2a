//! Export document entity

use serde::Serialize;

/// File name of the plain-text report download
pub const TEXT_REPORT_FILE_NAME: &str = "apk_analysis_report.txt";

/// A rendered report ready to be saved or downloaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportDocument {
    /// Plain-text document with the fixed download name
    pub fn plain_text(contents: String) -> Self {
        Self {
            file_name: TEXT_REPORT_FILE_NAME.to_string(),
            mime_type: "text/plain",
            contents,
        }
    }

    pub fn json(file_name: impl Into<String>, contents: String) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: "application/json",
            contents,
        }
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
