//! Domain entities
//!
//! Core objects of an analysis session: the accepted file, the progress
//! stages and the report built from them.

mod export;
mod progress;
mod report;
mod uploaded_file;

pub use export::{ExportDocument, TEXT_REPORT_FILE_NAME};
pub use progress::{ANALYSIS_STEPS, ProgressStep};
pub use report::{
    AppMetadata, MetadataField, Permission, Polarity, Report, RiskLevel, SecurityFinding,
    SecurityScore, SecurityTier,
};
pub use uploaded_file::{FileCandidate, UploadedFile};
