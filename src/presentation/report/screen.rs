//! On-screen report blocks
//!
//! Plain mappings from the report to the blocks a host paints. No decisions
//! are made here.

use crate::domain::entities::{Report, SecurityTier, UploadedFile};
use crate::utils::{format_file_size, format_timestamp};
use serde::Serialize;

/// A label/value row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    pub label: String,
    pub value: String,
}

impl DetailItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCard {
    pub name: &'static str,
    pub description: &'static str,
    /// Style class: `normal` or `dangerous`
    pub level: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBadge {
    pub value: u8,
    pub tier: SecurityTier,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingCard {
    pub title: &'static str,
    pub status: &'static str,
    /// Style class: `positive`, `warning` or `negative`
    pub polarity: &'static str,
    pub icon: &'static str,
}

/// Everything the results panel shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenReport {
    pub app_details: Vec<DetailItem>,
    pub permissions: Vec<PermissionCard>,
    pub score: ScoreBadge,
    pub findings: Vec<FindingCard>,
}

impl ScreenReport {
    /// Value of an app detail row by label
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.app_details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }
}

/// Rows shown while the file is being analyzed
pub fn file_info(file: &UploadedFile) -> Vec<DetailItem> {
    let mut rows = vec![
        DetailItem::new("File Name", file.name()),
        DetailItem::new("File Size", format_file_size(file.size_bytes())),
        DetailItem::new("Upload Time", format_timestamp(&file.received_at())),
    ];
    if let Some(digest) = file.sha256() {
        rows.push(DetailItem::new("SHA-256", digest));
    }
    rows
}

pub fn screen_report(report: &Report) -> ScreenReport {
    let app_details = report
        .metadata()
        .fields()
        .iter()
        .map(|f| DetailItem::new(f.label, f.value.clone()))
        .collect();

    let permissions = report
        .permissions()
        .iter()
        .map(|p| PermissionCard {
            name: p.identifier,
            description: p.description,
            level: p.risk_level.as_str(),
            icon: p.icon_ref,
        })
        .collect();

    let score = report.score();
    let findings = report
        .findings()
        .iter()
        .map(|f| FindingCard {
            title: f.title,
            status: f.status,
            polarity: f.polarity.as_str(),
            icon: f.icon_ref,
        })
        .collect();

    ScreenReport {
        app_details,
        permissions,
        score: ScoreBadge {
            value: score.value,
            tier: score.tier,
            caption: score.tier.caption(),
        },
        findings,
    }
}
