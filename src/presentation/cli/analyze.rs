//! The `analyze` command
//!
//! Checks the file name before anything else touches the disk: a rejected
//! file is never hashed and no output directory is created for it.

use super::commands::AnalyzeArgs;
use super::progress::ProgressReporter;
use super::terminal::{format_file_info, format_notification, format_screen, print_banner};
use crate::application::dto::IntakeEvent;
use crate::application::{IntakeController, Notification};
use crate::domain::repositories::{ReportWriter, WriteOptions};
use crate::domain::services::FileValidator;
use crate::error::IntakeError;
use crate::infrastructure::{LocalReportWriter, SystemClock, digest_file, inspect_file};
use crate::presentation::report::ReportRenderer;
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use std::sync::Arc;

/// Runs one analysis and returns the paths of the saved reports
pub async fn run_analyze(args: &AnalyzeArgs) -> Result<Vec<PathBuf>> {
    let file = args.file.as_path();
    let candidate =
        inspect_file(file).with_context(|| format!("Failed to read file: {}", file.display()))?;

    if !FileValidator::new().is_accepted(&candidate) {
        tracing::info!(name = candidate.name(), "file rejected before probing");
        return Err(IntakeError::InvalidFileType {
            name: candidate.name().to_string(),
        }
        .into());
    }

    let digest =
        digest_file(file).with_context(|| format!("Failed to hash file: {}", file.display()))?;
    let candidate = candidate.with_sha256(digest);

    print_banner();
    println!();

    let (handle, mut events) =
        IntakeController::spawn(args.intake_options(), Arc::new(SystemClock));
    handle.submit(candidate).await?;

    let writer = LocalReportWriter::new(&args.output).with_context(|| {
        format!(
            "Failed to prepare output directory: {}",
            args.output.display()
        )
    })?;

    let progress = ProgressReporter::new();
    let mut presented = false;
    while let Some(event) = events.recv().await {
        match event {
            IntakeEvent::FileAccepted { info, .. } => progress.println(format_file_info(&info)),
            IntakeEvent::Progress { step, .. } => progress.update(&step),
            IntakeEvent::Results { screen, .. } => {
                progress.finish();
                println!("{}", format_screen(&screen));
                presented = true;
                break;
            }
            _ => {}
        }
    }
    if !presented {
        return Err(anyhow!("Analysis ended without a report"));
    }

    while let Ok(event) = events.try_recv() {
        if let IntakeEvent::Notified { notification } = event {
            println!("{}", format_notification(&notification));
        }
    }

    let options = WriteOptions {
        overwrite: args.overwrite,
    };
    let document = handle
        .export()
        .await?
        .ok_or_else(|| anyhow!("Analysis ended without a report"))?;
    let saved = writer
        .write(&document, &options)
        .context("Failed to save text report")?;
    let mut saved_paths = vec![saved.saved_path];

    if args.json {
        let report = handle
            .report()
            .await?
            .ok_or_else(|| anyhow!("Analysis ended without a report"))?;
        let document = ReportRenderer
            .json_document(&report)
            .context("Failed to serialize report")?;
        let saved = writer
            .write(&document, &options)
            .context("Failed to save JSON report")?;
        saved_paths.push(saved.saved_path);
    }

    for path in &saved_paths {
        let notification = Notification::success(format!("Report saved to {}", path.display()));
        println!("{}", format_notification(&notification));
    }

    Ok(saved_paths)
}
