//! Domain services
//!
//! Validation, the staged progress sequence, score tiering and report
//! assembly.

pub mod catalog;
mod file_validator;
mod progress_simulator;
mod report_builder;
mod scoring;

pub use file_validator::{APK_EXTENSION, FileValidator};
pub use progress_simulator::{
    CancelHandle, CancelSignal, DEFAULT_STEP_DELAY, ProgressSimulator, SimulationOutcome,
    cancel_pair,
};
pub use report_builder::ReportBuilder;
pub use scoring::ScorePolicy;
