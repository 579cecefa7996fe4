//! CLI entry point - the composition root.
//!
//! Loads `.env`, initialises logging and dispatches to a command handler.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use certdesk_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve(args) => handlers::serve::execute(args, cli.database).await,
        Commands::Seed(args) => handlers::seed::execute(args, &cli.database)
            .await
            .map(|_| ()),
        Commands::InitDb => handlers::init_db::execute(&cli.database).await,
    }
}
