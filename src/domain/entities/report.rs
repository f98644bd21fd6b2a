//! Report entity
//!
//! Aggregate produced once per analysis session. Everything except the
//! uploaded file and the derived app size comes from the static catalog.

use super::uploaded_file::UploadedFile;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Protection level of an Android permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Normal,
    Dangerous,
}

impl RiskLevel {
    /// Lowercase name used as a style class by hosts
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Normal => "normal",
            RiskLevel::Dangerous => "dangerous",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Normal => write!(f, "Normal"),
            RiskLevel::Dangerous => write!(f, "Dangerous"),
        }
    }
}

/// A permission entry in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Permission {
    pub identifier: &'static str,
    pub description: &'static str,
    pub risk_level: RiskLevel,
    pub icon_ref: &'static str,
    /// Second line used by the text export
    pub note: &'static str,
}

/// Whether a finding counts for or against the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Warning,
    Negative,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Warning => "warning",
            Polarity::Negative => "negative",
        }
    }

    /// Warnings and negatives are both listed as concerns
    pub fn is_concern(&self) -> bool {
        !matches!(self, Polarity::Positive)
    }
}

/// A security checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityFinding {
    pub title: &'static str,
    pub status: &'static str,
    pub polarity: Polarity,
    pub icon_ref: &'static str,
    /// Status wording used by the text export
    pub export_status: &'static str,
}

/// Qualitative bucket for a security score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityTier {
    Low,
    Medium,
    High,
}

impl SecurityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityTier::Low => "low",
            SecurityTier::Medium => "medium",
            SecurityTier::High => "high",
        }
    }

    /// Caption shown next to the score
    pub fn caption(&self) -> &'static str {
        match self {
            SecurityTier::Low => "Low Security",
            SecurityTier::Medium => "Moderate Security",
            SecurityTier::High => "High Security",
        }
    }
}

/// Numeric score (0 - 100) with its tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityScore {
    pub value: u8,
    pub tier: SecurityTier,
}

/// One labelled application detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataField {
    pub label: &'static str,
    pub value: String,
    /// Whether the field is listed in the text export
    #[serde(skip)]
    pub exported: bool,
}

/// Ordered application details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AppMetadata {
    fields: Vec<MetadataField>,
}

impl AppMetadata {
    pub fn new(fields: Vec<MetadataField>) -> Self {
        Self { fields }
    }

    /// Looks up a field value by label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    pub fn fields(&self) -> &[MetadataField] {
        &self.fields
    }

    /// Fields included in the text export, in display order
    pub fn exported(&self) -> impl Iterator<Item = &MetadataField> {
        self.fields.iter().filter(|f| f.exported)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The analysis report for one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    file: UploadedFile,
    metadata: AppMetadata,
    permissions: &'static [Permission],
    findings: &'static [SecurityFinding],
    score: SecurityScore,
    generated_at: DateTime<Local>,
}

impl Report {
    pub fn new(
        file: UploadedFile,
        metadata: AppMetadata,
        permissions: &'static [Permission],
        findings: &'static [SecurityFinding],
        score: SecurityScore,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            file,
            metadata,
            permissions,
            findings,
            score,
            generated_at,
        }
    }

    pub fn file(&self) -> &UploadedFile {
        &self.file
    }

    pub fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }

    pub fn permissions(&self) -> &'static [Permission] {
        self.permissions
    }

    pub fn findings(&self) -> &'static [SecurityFinding] {
        self.findings
    }

    pub fn score(&self) -> SecurityScore {
        self.score
    }

    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    /// Number of permissions flagged as dangerous
    pub fn dangerous_permissions(&self) -> usize {
        self.permissions
            .iter()
            .filter(|p| p.risk_level == RiskLevel::Dangerous)
            .count()
    }
}
