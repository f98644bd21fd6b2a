//! apklens - staged APK intake with mock analysis reports
//!
//! A file is validated by name, a fixed progress sequence is played, and a
//! report assembled from a static catalog is presented and exported. Only the
//! file's name, size and receipt time are real.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

pub use application::dto::{IntakeEvent, IntakeOptions, IntakePhase, IntakeSnapshot};
pub use application::{IntakeController, IntakeHandle, Notification, NotificationKind};
pub use domain::entities::{ExportDocument, FileCandidate, ProgressStep, Report, UploadedFile};
pub use error::IntakeError;
pub use presentation::report::{ReportRenderer, ScreenReport};
pub use utils::format_file_size;
