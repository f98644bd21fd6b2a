//! Report builder service
//!
//! Assembles a `Report` from the static catalog and the accepted file.

use super::catalog::{
    APP_PROFILE, APP_SIZE_LABEL, APP_SIZE_POSITION, MOCK_SECURITY_SCORE, PERMISSIONS,
    SECURITY_FINDINGS,
};
use super::scoring::ScorePolicy;
use crate::domain::entities::{AppMetadata, MetadataField, Report, UploadedFile};
use crate::domain::repositories::Clock;
use crate::utils::format_file_size;

/// Builds reports for accepted files
///
/// The output depends only on the file and the clock: two builds of the same
/// file under a frozen clock are equal.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    policy: ScorePolicy,
    score: u8,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(ScorePolicy::default())
    }
}

impl ReportBuilder {
    pub fn new(policy: ScorePolicy) -> Self {
        Self {
            policy,
            score: MOCK_SECURITY_SCORE,
        }
    }

    /// Overrides the raw score fed to the policy
    pub fn with_score(mut self, score: u8) -> Self {
        self.score = score;
        self
    }

    pub fn policy(&self) -> ScorePolicy {
        self.policy
    }

    pub fn build(&self, file: &UploadedFile, clock: &dyn Clock) -> Report {
        let metadata = app_metadata(file);
        let score = self.policy.assess(self.score);

        tracing::debug!(
            file = file.name(),
            score = score.value,
            tier = score.tier.as_str(),
            "built report"
        );

        Report::new(
            file.clone(),
            metadata,
            &PERMISSIONS,
            &SECURITY_FINDINGS,
            score,
            clock.now(),
        )
    }
}

fn app_metadata(file: &UploadedFile) -> AppMetadata {
    let mut fields: Vec<MetadataField> = APP_PROFILE
        .iter()
        .map(|entry| MetadataField {
            label: entry.label,
            value: entry.value.to_string(),
            exported: entry.exported,
        })
        .collect();

    fields.insert(
        APP_SIZE_POSITION,
        MetadataField {
            label: APP_SIZE_LABEL,
            value: format_file_size(file.size_bytes()),
            exported: false,
        },
    );

    AppMetadata::new(fields)
}
