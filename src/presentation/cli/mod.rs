//! CLI module

mod analyze;
mod commands;
mod progress;
mod terminal;

pub use analyze::run_analyze;
pub use commands::{AnalyzeArgs, Cli, Commands};
pub use progress::ProgressReporter;
pub use terminal::{
    format_file_info, format_notification, format_permission_table, format_screen, print_banner,
};
