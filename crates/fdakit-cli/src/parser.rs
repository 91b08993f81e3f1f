//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the fdakit tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "fdakit")]
#[command(about = "Fetch FDA 510(k) PDFs and explore the AI/ML device datasets")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fetch_args_parse_with_defaults() {
        let cli = Cli::parse_from(["fdakit", "fetch", "K241380", "241381"]);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Fetch {
                k_numbers,
                out,
                parallel,
                ..
            } => {
                assert_eq!(k_numbers, vec!["K241380", "241381"]);
                assert_eq!(out.to_str().unwrap(), "fda_pdfs");
                assert_eq!(parallel, 5);
            }
            Commands::Stats { .. } => panic!("expected fetch"),
        }
    }

    #[test]
    fn fetch_overrides_parse() {
        let cli = Cli::parse_from([
            "fdakit", "--verbose", "fetch", "K241380", "--out", "/tmp/pdfs", "--parallel", "2",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Fetch { out, parallel, .. } => {
                assert_eq!(out.to_str().unwrap(), "/tmp/pdfs");
                assert_eq!(parallel, 2);
            }
            Commands::Stats { .. } => panic!("expected fetch"),
        }
    }

    #[test]
    fn stats_args_parse() {
        let cli = Cli::parse_from([
            "fdakit",
            "stats",
            "--submissions",
            "data/ai_devices.csv",
            "--from",
            "2020",
            "--specialty",
            "Radiology",
            "--specialty",
            "Neurology",
        ]);
        match cli.command {
            Commands::Stats {
                submissions,
                from,
                to,
                specialties,
                ..
            } => {
                assert_eq!(submissions.to_str().unwrap(), "data/ai_devices.csv");
                assert_eq!(from, Some(2020));
                assert_eq!(to, None);
                assert_eq!(specialties, vec!["Radiology", "Neurology"]);
            }
            Commands::Fetch { .. } => panic!("expected stats"),
        }
    }
}
