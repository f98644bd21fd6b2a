//! Progress step entity

use serde::Serialize;

/// One stage of the staged analysis animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    /// Completion percentage (0 - 100)
    pub percentage: u8,
    /// Label shown under the progress bar
    pub label: &'static str,
}

impl ProgressStep {
    pub const fn new(percentage: u8, label: &'static str) -> Self {
        Self { percentage, label }
    }

    /// Returns true for the step that closes the sequence
    pub fn is_final(&self) -> bool {
        self.percentage == 100
    }
}

/// The fixed analysis sequence: non-decreasing percentages, ending at 100.
pub static ANALYSIS_STEPS: [ProgressStep; 6] = [
    ProgressStep::new(10, "Uploading APK file..."),
    ProgressStep::new(25, "Extracting APK contents..."),
    ProgressStep::new(40, "Parsing AndroidManifest.xml..."),
    ProgressStep::new(60, "Analyzing permissions..."),
    ProgressStep::new(80, "Performing security scan..."),
    ProgressStep::new(100, "Analysis complete!"),
];
