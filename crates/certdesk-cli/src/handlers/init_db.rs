//! Init-db command handler.

use std::path::Path;

use anyhow::Result;
use certdesk_db::setup_database;

/// Create the schema if it does not exist yet.
pub async fn execute(database: &Path) -> Result<()> {
    let pool = setup_database(database).await?;
    pool.close().await;
    println!("Database ready at {}", database.display());
    Ok(())
}
