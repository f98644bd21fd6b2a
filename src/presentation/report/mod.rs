//! Report rendering
//!
//! Turns a `Report` into on-screen blocks, the plain-text download and the
//! JSON export.

mod screen;
mod text;

pub use screen::{
    DetailItem, FindingCard, PermissionCard, ScoreBadge, ScreenReport, file_info, screen_report,
};
pub use text::{
    REPORT_TITLE, SECTION_APPLICATION, SECTION_PERMISSIONS, SECTION_RECOMMENDATIONS,
    SECTION_SECURITY, text_report,
};

use crate::domain::entities::{ExportDocument, Report, UploadedFile};
use chrono::{DateTime, Local};

/// Stateless renderer for analysis reports
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn file_info(&self, file: &UploadedFile) -> Vec<DetailItem> {
        file_info(file)
    }

    pub fn render_on_screen(&self, report: &Report) -> ScreenReport {
        screen_report(report)
    }

    pub fn render_as_text(&self, report: &Report, generated_at: &DateTime<Local>) -> String {
        text_report(report, generated_at)
    }

    /// Wraps the text rendering as the `apk_analysis_report.txt` download
    pub fn text_document(&self, report: &Report, generated_at: &DateTime<Local>) -> ExportDocument {
        ExportDocument::plain_text(text_report(report, generated_at))
    }

    /// Pretty JSON of the whole report, named after the uploaded file
    pub fn json_document(&self, report: &Report) -> serde_json::Result<ExportDocument> {
        let contents = serde_json::to_string_pretty(report)?;
        let file_name = format!("{}_analysis_report.json", report.file().stem());
        Ok(ExportDocument::json(file_name, contents))
    }
}
