//! Main commands enum and subcommand arguments.

use std::path::PathBuf;

use clap::Subcommand;

use fdakit_download::{DEFAULT_BASE_URL, DEFAULT_MAX_PARALLEL, DEFAULT_OUTPUT_DIR};

/// Available commands for the fdakit tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Download 510(k) summary PDFs from the FDA archive by K number
    Fetch {
        /// K numbers to download (e.g. K241380; the K prefix may be omitted)
        #[arg(required = true)]
        k_numbers: Vec<String>,

        /// Directory to write PDFs into
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        out: PathBuf,

        /// Maximum number of concurrent downloads
        #[arg(short, long, default_value_t = DEFAULT_MAX_PARALLEL)]
        parallel: usize,

        /// Base URL of the FDA document archive
        #[arg(long, env = "FDAKIT_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Summarize the AI/ML device submissions dataset
    Stats {
        /// Path to the AI/ML device submissions CSV
        #[arg(long)]
        submissions: PathBuf,

        /// Path to the device classification JSON (optional)
        #[arg(long)]
        classifications: Option<PathBuf>,

        /// Keep only decisions from this year onward
        #[arg(long)]
        from: Option<i32>,

        /// Keep only decisions up to and including this year
        #[arg(long)]
        to: Option<i32>,

        /// Keep only these medical specialties (repeatable)
        #[arg(long = "specialty")]
        specialties: Vec<String>,

        /// How many entries to show in the top-N rankings
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}
