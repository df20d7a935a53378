//! Command-line argument definitions.
//!
//! The declared graph is fixed at build time; these flags are thin I/O
//! overrides around it (output location, format, configuration file,
//! logging verbosity).

use clap::Parser;

/// Command-line arguments for the Cumulus diagram compiler.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output image path (defaults to the declaration's filename)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format: png or svg (defaults to the declaration's format)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
