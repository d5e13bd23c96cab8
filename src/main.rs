//! Promoter Report CLI
//!
//! A command-line tool for exporting promoter records from a ClickHouse warehouse.

use clap::Parser;
use promoter_report::cli::{
    args::{Cli, Commands},
    commands::fetch,
};
use promoter_report::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the appropriate command
    match cli.command {
        Commands::Fetch { format } => {
            // Run preflight checks unless skipped
            if !cli.skip_preflight {
                run_preflight_checks().await?;
            }

            fetch::fetch(&format).await?;
        }

        Commands::Check => {
            run_preflight_checks().await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("promoter_report=debug")
    } else {
        EnvFilter::new("promoter_report=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks() -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks().await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
