//! CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches to handlers.
//! Per-identifier download failures are reported in the output but keep
//! the exit code at zero; only fatal errors (unusable output directory,
//! unreadable dataset) exit non-zero.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fdakit_cli::{Cli, Commands, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fetch {
            k_numbers,
            out,
            parallel,
            base_url,
        } => {
            handlers::fetch::execute(handlers::fetch::FetchArgs {
                k_numbers: &k_numbers,
                out: &out,
                parallel,
                base_url: &base_url,
            })
            .await?;
        }
        Commands::Stats {
            submissions,
            classifications,
            from,
            to,
            specialties,
            top,
        } => {
            handlers::stats::execute(handlers::stats::StatsArgs {
                submissions: &submissions,
                classifications: classifications.as_ref(),
                from,
                to,
                specialties,
                top,
            })?;
        }
    }

    Ok(())
}
