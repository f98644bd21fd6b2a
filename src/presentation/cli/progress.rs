//! Progress reporting for CLI

use crate::domain::entities::ProgressStep;
use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos:>3}% {msg}";

/// Percentage bar driven by analysis steps
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        Self { bar }
    }

    /// Moves the bar to the step's percentage and shows its label
    pub fn update(&self, step: &ProgressStep) {
        self.bar.set_position(u64::from(step.percentage));
        self.bar.set_message(step.label);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Suspends the bar while printing other output
    pub fn println(&self, line: impl AsRef<str>) {
        self.bar.println(line);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
