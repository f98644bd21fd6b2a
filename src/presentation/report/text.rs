//! Plain-text report export

use crate::domain::entities::Report;
use crate::domain::services::catalog::RECOMMENDATIONS;
use crate::utils::format_timestamp;
use chrono::{DateTime, Local};
use std::fmt::Write;

pub const REPORT_TITLE: &str = "APK Decompiler Pro - Analysis Report";
const REPORT_FOOTER: &str =
    "Generated by APK Decompiler Pro - Advanced Android Application Analysis System";

pub const SECTION_APPLICATION: &str = "APPLICATION INFORMATION";
pub const SECTION_PERMISSIONS: &str = "PERMISSIONS ANALYSIS";
pub const SECTION_SECURITY: &str = "SECURITY ANALYSIS";
pub const SECTION_RECOMMENDATIONS: &str = "RECOMMENDATIONS";

/// Renders the downloadable report
///
/// Only the `Generated:` line depends on `generated_at`; the rest is fixed
/// for a given report.
pub fn text_report(report: &Report, generated_at: &DateTime<Local>) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report, generated_at);
    out
}

fn write_report(
    out: &mut String,
    report: &Report,
    generated_at: &DateTime<Local>,
) -> std::fmt::Result {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "Generated: {}", format_timestamp(generated_at))?;
    writeln!(out)?;

    writeln!(out, "=== {SECTION_APPLICATION} ===")?;
    for field in report.metadata().exported() {
        writeln!(out, "{}: {}", field.label, field.value)?;
    }
    writeln!(out)?;

    writeln!(out, "=== {SECTION_PERMISSIONS} ===")?;
    for (i, permission) in report.permissions().iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({})",
            i + 1,
            permission.identifier,
            permission.risk_level
        )?;
        writeln!(out, "   - {}", permission.description)?;
        writeln!(out, "   - {}", permission.note)?;
        writeln!(out)?;
    }

    let score = report.score();
    writeln!(out, "=== {SECTION_SECURITY} ===")?;
    writeln!(
        out,
        "Overall Security Score: {}/100 ({})",
        score.value,
        score.tier.caption()
    )?;
    writeln!(out)?;

    writeln!(out, "Positive Security Features:")?;
    for finding in report.findings().iter().filter(|f| !f.polarity.is_concern()) {
        writeln!(out, "- {}: {}", finding.title, finding.export_status)?;
    }
    writeln!(out)?;

    writeln!(out, "Areas of Concern:")?;
    for finding in report.findings().iter().filter(|f| f.polarity.is_concern()) {
        writeln!(out, "- {}: {}", finding.title, finding.export_status)?;
    }
    writeln!(out)?;

    writeln!(out, "=== {SECTION_RECOMMENDATIONS} ===")?;
    for (i, advice) in RECOMMENDATIONS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, advice)?;
    }
    writeln!(out)?;

    writeln!(out, "=== END OF REPORT ===")?;
    write!(out, "{REPORT_FOOTER}")
}
