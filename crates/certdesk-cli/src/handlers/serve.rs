//! Serve command handler.

use std::path::PathBuf;

use anyhow::Result;
use certdesk_axum::start_server;

use crate::commands::ServeArgs;

/// Run the HTTP API until Ctrl-C.
pub async fn execute(args: ServeArgs, database: PathBuf) -> Result<()> {
    let config = args.into_config(database);
    tracing::debug!(port = config.port, cors = ?config.cors, "Starting server");
    start_server(config).await
}
