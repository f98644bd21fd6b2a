//! CLI commands using clap

use crate::application::dto::IntakeOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// apklens - APK intake and report tool
///
/// Accepts an APK, plays the staged analysis and writes the analysis report.
#[derive(Parser)]
#[command(name = "apklens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze APK files and export a report", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze an APK file and export the report
    Analyze(AnalyzeArgs),

    /// List the permissions every report covers
    Permissions,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the APK file
    pub file: PathBuf,

    /// Output directory for the exported report
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Also write the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Overwrite existing reports
    #[arg(long)]
    pub overwrite: bool,

    /// Pause after each analysis step, in milliseconds
    #[arg(long, default_value_t = 800)]
    pub step_delay_ms: u64,
}

impl AnalyzeArgs {
    /// Maps the analyze flags onto intake options
    pub fn intake_options(&self) -> IntakeOptions {
        IntakeOptions::default().with_step_delay(Duration::from_millis(self.step_delay_ms))
    }
}
