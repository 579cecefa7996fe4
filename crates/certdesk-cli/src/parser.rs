//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use certdesk_axum::bootstrap::DEFAULT_DATABASE_PATH;
use clap::Parser;

use crate::commands::Commands;

/// Certificate and testimonial issuing backend.
#[derive(Debug, Parser)]
#[command(name = "certdesk")]
#[command(about = "Issue and verify academic certificates and testimonials")]
#[command(version)]
pub struct Cli {
    /// `SQLite` database file
    #[arg(
        long = "database",
        env = "CERTDESK_DATABASE",
        default_value = DEFAULT_DATABASE_PATH,
        global = true
    )]
    pub database: PathBuf,

    /// Enable debug output (overrides `RUST_LOG`)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
