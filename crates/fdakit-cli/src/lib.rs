//! CLI adapter for fdakit.
//!
//! Argument parsing and presentation only; all behavior lives in the
//! library crates.

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;

// Used by the main.rs binary
use tracing_subscriber as _;
