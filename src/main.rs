use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use apklens::domain::services::catalog::PERMISSIONS;
use apklens::presentation::cli::{Cli, Commands, format_permission_table, run_analyze};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze(args) => {
            run_analyze(&args).await?;
        }
        Commands::Permissions => print!("{}", format_permission_table(&PERMISSIONS)),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
